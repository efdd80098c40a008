use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use crate::domain::entities::users::user::User;
use crate::domain::models::token::TokenPair;

/// 클라이언트에게 노출되는 사용자 정보
///
/// 비밀번호 해시와 저장된 리프레시 토큰은 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub avatar: String,
    pub is_active: bool,
    /// 프로필 문서 ID
    pub info: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            name,
            avatar,
            is_active,
            info,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            email,
            name,
            avatar,
            is_active,
            info: info.map(|info| info.to_hex()),
            created_at,
            updated_at,
        }
    }
}

/// 회원가입/로그인 성공 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: TokenPair,
    pub user: UserResponse,
}

impl AuthResponse {
    pub fn new(token: TokenPair, user: User) -> Self {
        Self {
            token,
            user: UserResponse::from(user),
        }
    }
}
