//! Refresh Token Ledger 엔트리
//!
//! 사용자별 현재 리프레시 토큰을 서버 측에 기록해 두어
//! 로그아웃 시 강제로 무효화할 수 있게 합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// `refreshtokens` 컬렉션 문서
///
/// 사용자당 최대 하나만 유지됩니다 (`user_id` 유니크 인덱스).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    pub token: String,
    pub created_at: DateTime,
}

impl RefreshTokenRecord {
    pub fn new(user_id: ObjectId, token: impl Into<String>) -> Self {
        Self {
            id: None,
            user_id,
            token: token.into(),
            created_at: DateTime::now(),
        }
    }
}
