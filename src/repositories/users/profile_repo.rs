//! 프로필(`userinfos`) 리포지토리

use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection,
};
use crate::{
    db::Database,
    domain::entities::users::Profile,
    errors::AppResult,
};

/// 프로필 컬렉션 이름
pub const PROFILES_COLLECTION: &str = "userinfos";

/// 프로필 저장소 인터페이스
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// 프로필 저장. ID가 없으면 새로 할당합니다.
    async fn create(&self, profile: Profile) -> AppResult<Profile>;

    /// 프로필 삭제. 회원가입 보상 삭제 용도
    async fn delete(&self, id: &ObjectId) -> AppResult<bool>;
}

/// MongoDB 기반 프로필 리포지토리
#[derive(Clone)]
pub struct MongoProfileRepository {
    db: Database,
}

impl MongoProfileRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Profile> {
        self.db.collection::<Profile>(PROFILES_COLLECTION)
    }
}

#[async_trait]
impl ProfileStore for MongoProfileRepository {
    async fn create(&self, mut profile: Profile) -> AppResult<Profile> {
        if profile.id.is_none() {
            profile.id = Some(ObjectId::new());
        }

        self.collection().insert_one(&profile).await?;

        Ok(profile)
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self.collection()
            .delete_one(doc! { "_id": *id })
            .await?;

        Ok(result.deleted_count > 0)
    }
}
