//! User Entity Implementation
//!
//! 회원가입/로그인 대상이 되는 사용자 엔티티의 핵심 구현체입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `users` 컬렉션 문서와 1:1로 매핑됩니다.
/// 비밀번호는 항상 bcrypt 해시로만 저장됩니다.
/// 필드는 기존 컬렉션과 같은 camelCase(`isActive`, `refreshToken` 등)로 저장됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 사용자 이름 (unique)
    pub name: String,
    /// 해시된 비밀번호
    pub password: String,
    /// 프로필 이미지 (회원가입 시 빈 문자열)
    #[serde(default)]
    pub avatar: String,
    /// 계정 활성화 여부
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// 프로필(UserInfo) 문서 참조
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<ObjectId>,
    /// 현재 유효한 리프레시 토큰
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

fn default_active() -> bool {
    true
}

impl User {
    /// 새 로컬 사용자 생성
    ///
    /// ID는 저장 전에 미리 할당되어 토큰 발급에 바로 사용할 수 있습니다.
    pub fn new_local(id: ObjectId, email: String, name: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: Some(id),
            email,
            name,
            password: password_hash,
            avatar: String::new(),
            is_active: true,
            info: None,
            refresh_token: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// 사용자 문서의 부분 업데이트 내용
///
/// `None`인 필드는 변경하지 않습니다.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    /// 새 리프레시 토큰
    pub refresh_token: Option<String>,
    /// 연결할 프로필 ID
    pub info: Option<ObjectId>,
}

impl UserChanges {
    pub fn refresh_token(token: impl Into<String>) -> Self {
        Self {
            refresh_token: Some(token.into()),
            ..Self::default()
        }
    }

    pub fn link_profile(profile_id: ObjectId) -> Self {
        Self {
            info: Some(profile_id),
            ..Self::default()
        }
    }

    /// 변경 내용을 엔티티에 적용합니다.
    pub fn apply(&self, user: &mut User) {
        if let Some(ref token) = self.refresh_token {
            user.refresh_token = Some(token.clone());
        }
        if let Some(info) = self.info {
            user.info = Some(info);
        }
        user.updated_at = DateTime::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_local_user_defaults() {
        let id = ObjectId::new();
        let user = User::new_local(id, "a@x.com".into(), "alice".into(), "$2b$hash".into());

        assert_eq!(user.id, Some(id));
        assert!(user.is_active);
        assert!(user.avatar.is_empty());
        assert!(user.info.is_none());
        assert!(user.refresh_token.is_none());
    }

    #[test]
    fn test_user_changes_apply_only_set_fields() {
        let mut user = User::new_local(ObjectId::new(), "a@x.com".into(), "alice".into(), "h".into());
        user.refresh_token = Some("old".into());

        let profile_id = ObjectId::new();
        UserChanges::link_profile(profile_id).apply(&mut user);

        assert_eq!(user.info, Some(profile_id));
        assert_eq!(user.refresh_token.as_deref(), Some("old"));

        UserChanges::refresh_token("new").apply(&mut user);
        assert_eq!(user.refresh_token.as_deref(), Some("new"));
    }

    #[test]
    fn test_decodes_camel_case_document() {
        use mongodb::bson::doc;

        let id = ObjectId::new();
        let document = doc! {
            "_id": id,
            "email": "a@x.com",
            "name": "alice",
            "password": "$2b$hash",
            "avatar": "",
            "isActive": false,
            "refreshToken": "jwt",
            "createdAt": DateTime::now(),
            "updatedAt": DateTime::now(),
        };

        let user: User = mongodb::bson::from_document(document).unwrap();

        assert_eq!(user.id, Some(id));
        assert!(!user.is_active);
        assert_eq!(user.refresh_token.as_deref(), Some("jwt"));
    }

    #[test]
    fn test_encodes_camel_case_fields() {
        let user = User::new_local(ObjectId::new(), "a@x.com".into(), "alice".into(), "h".into());
        let document = mongodb::bson::to_document(&user).unwrap();

        assert_eq!(document.get_bool("isActive").unwrap(), true);
        assert!(document.contains_key("createdAt"));
        assert!(!document.contains_key("is_active"));
    }
}
