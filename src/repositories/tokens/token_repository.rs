//! Refresh Token Ledger 리포지토리
//!
//! 사용자별 리프레시 토큰 기록을 MongoDB `refreshtokens` 컬렉션에 보관합니다.
//! 로그아웃 시 해당 사용자의 기록을 모두 삭제해 서버 측에서 세션을 끊습니다.

use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::{
    db::Database,
    domain::entities::tokens::RefreshTokenRecord,
    errors::AppResult,
    repositories::is_duplicate_key,
};

/// 리프레시 토큰 컬렉션 이름
pub const REFRESH_TOKENS_COLLECTION: &str = "refreshtokens";

/// 리프레시 토큰 기록 저장소 인터페이스
#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    /// 사용자 ID로 기록 조회
    async fn find_by_user_id(&self, user_id: &ObjectId) -> AppResult<Option<RefreshTokenRecord>>;

    /// 기록 저장
    ///
    /// * `Ok(true)` - 새로 저장됨
    /// * `Ok(false)` - 같은 사용자의 기록이 이미 있어 저장하지 않음
    async fn create(&self, record: RefreshTokenRecord) -> AppResult<bool>;

    /// 사용자의 모든 기록 삭제. 삭제된 개수를 반환합니다.
    async fn delete_all_by_user_id(&self, user_id: &ObjectId) -> AppResult<u64>;
}

/// MongoDB 기반 리프레시 토큰 리포지토리
///
/// `user_id` 유니크 인덱스로 사용자당 최대 하나의 기록을 보장합니다.
/// 동시에 들어온 두 요청이 모두 "기록 없음"을 보고 저장을 시도하면
/// 나중 요청은 duplicate key 오류를 받고 `Ok(false)`로 처리됩니다.
#[derive(Clone)]
pub struct MongoRefreshTokenRepository {
    db: Database,
}

impl MongoRefreshTokenRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<RefreshTokenRecord> {
        self.db.collection::<RefreshTokenRecord>(REFRESH_TOKENS_COLLECTION)
    }

    /// `user_id` 유니크 인덱스 생성
    pub async fn create_indexes(&self) -> AppResult<()> {
        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("user_id_unique".to_string())
                .build())
            .build();

        self.collection().create_index(user_index).await?;

        Ok(())
    }
}

#[async_trait]
impl RefreshTokenStore for MongoRefreshTokenRepository {
    async fn find_by_user_id(&self, user_id: &ObjectId) -> AppResult<Option<RefreshTokenRecord>> {
        Ok(self.collection().find_one(doc! { "user_id": *user_id }).await?)
    }

    async fn create(&self, mut record: RefreshTokenRecord) -> AppResult<bool> {
        if record.id.is_none() {
            record.id = Some(ObjectId::new());
        }

        match self.collection().insert_one(&record).await {
            Ok(_) => Ok(true),
            Err(e) if is_duplicate_key(&e) => {
                log::debug!("Refresh token 기록이 이미 존재합니다 - user_id: {}", record.user_id);
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn delete_all_by_user_id(&self, user_id: &ObjectId) -> AppResult<u64> {
        let result = self.collection()
            .delete_many(doc! { "user_id": *user_id })
            .await?;

        Ok(result.deleted_count)
    }
}
