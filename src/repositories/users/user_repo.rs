//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층(Credential Store)입니다.
//! 오케스트레이터는 [`UserStore`] trait에만 의존하고,
//! 운영 환경에서는 MongoDB 구현인 [`MongoUserRepository`]가 주입됩니다.
//!
//! ## 특징
//!
//! - **유니크 제약**: `email`, `name` 유니크 인덱스로 중복 계정 방지
//! - **부분 업데이트**: `UserChanges`를 `$set` 문서로 변환
//! - **명시적 주입**: `Database` 핸들을 생성자로 전달

use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::{
    db::Database,
    domain::entities::users::{User, UserChanges},
    errors::{AppError, AppResult},
    repositories::is_duplicate_key,
};

/// 사용자 컬렉션 이름
pub const USERS_COLLECTION: &str = "users";

/// 사용자 저장소 인터페이스
///
/// 이메일/이름/ID 기반 조회와 생성, 부분 업데이트를 제공합니다.
/// 모든 메서드는 데이터베이스 오류를 `AppError::DatabaseError`로 반환합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 이메일 주소로 사용자 조회
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// 사용자 이름으로 조회
    async fn find_by_name(&self, name: &str) -> AppResult<Option<User>>;

    /// ObjectId로 조회
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    /// 새 사용자 저장
    ///
    /// * `Err(AppError::ConflictError)` - 이메일 또는 이름 유니크 제약 위반
    async fn create(&self, user: User) -> AppResult<User>;

    /// 사용자 부분 업데이트. 대상이 없으면 `Ok(None)`
    async fn update(&self, id: &ObjectId, changes: UserChanges) -> AppResult<Option<User>>;

    /// 사용자 삭제. 회원가입 중간 실패 시 보상 삭제에만 사용됩니다.
    async fn delete(&self, id: &ObjectId) -> AppResult<bool>;
}

/// MongoDB 기반 사용자 리포지토리
///
/// - **컬렉션명**: `users`
/// - **인덱스**: email(unique), name(unique)
#[derive(Clone)]
pub struct MongoUserRepository {
    /// MongoDB 데이터베이스 연결
    db: Database,
}

impl MongoUserRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.collection::<User>(USERS_COLLECTION)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    ///
    /// 1. **이메일 유니크 인덱스** - 중복 이메일 방지 및 로그인 조회 최적화
    /// 2. **이름 유니크 인덱스** - 중복 이름 방지
    ///
    /// 이미 중복 데이터가 있는 경우 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("name_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index, name_index])
            .await?;

        Ok(())
    }
}

/// `UserChanges`를 `$set` 대상 문서로 변환
fn changes_to_document(changes: &UserChanges) -> Document {
    let mut set = doc! { "updatedAt": DateTime::now() };

    if let Some(ref token) = changes.refresh_token {
        set.insert("refreshToken", token.clone());
    }
    if let Some(info) = changes.info {
        set.insert("info", info);
    }

    set
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.collection().find_one(doc! { "email": email }).await?)
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<User>> {
        Ok(self.collection().find_one(doc! { "name": name }).await?)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        Ok(self.collection().find_one(doc! { "_id": *id }).await?)
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        if user.id.is_none() {
            user.id = Some(ObjectId::new());
        }

        match self.collection().insert_one(&user).await {
            Ok(_) => Ok(user),
            Err(e) if is_duplicate_key(&e) => Err(AppError::ConflictError(
                "This email or name already exists".to_string(),
            )),
            Err(e) => Err(AppError::DatabaseError(e.to_string())),
        }
    }

    async fn update(&self, id: &ObjectId, changes: UserChanges) -> AppResult<Option<User>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self.collection()
            .find_one_and_update(
                doc! { "_id": *id },
                doc! { "$set": changes_to_document(&changes) },
            )
            .with_options(options)
            .await?;

        Ok(updated)
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self.collection()
            .delete_one(doc! { "_id": *id })
            .await?;

        Ok(result.deleted_count > 0)
    }
}
