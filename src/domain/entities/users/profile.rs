//! Profile Entity
//!
//! 회원가입 시 사용자마다 하나씩 만들어지는 프로필(`userinfos`) 문서입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 프로필 엔티티
///
/// 참조하는 `User`가 단독으로 소유합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 소유 사용자 ID
    pub user_id: ObjectId,
    pub street_address: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
    pub phone: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Profile {
    /// 빈 값으로 채워진 프로필을 만듭니다.
    pub fn empty_for(user_id: ObjectId) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            user_id,
            street_address: String::new(),
            postal_code: String::new(),
            city: String::new(),
            country: String::new(),
            phone: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
