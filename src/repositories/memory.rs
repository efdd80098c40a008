//! 메모리 기반 저장소
//!
//! MongoDB 없이 오케스트레이터와 HTTP 계층을 구동하기 위한 구현입니다.
//! 하나의 [`InMemoryStore`]가 세 저장소 trait을 모두 구현하며,
//! MongoDB 유니크 인덱스와 같은 제약(이메일/이름 유일, 사용자당 토큰 기록 하나)을 지킵니다.
//!
//! ```rust,ignore
//! let store = Arc::new(InMemoryStore::new());
//! let auth = AuthService::new(store.clone(), store.clone(), store.clone(), tokens, passwords);
//! ```

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::{
    domain::entities::{Profile, RefreshTokenRecord, User, UserChanges},
    errors::{AppError, AppResult},
    repositories::{
        tokens::RefreshTokenStore,
        users::{ProfileStore, UserStore},
    },
};

#[derive(Default)]
struct Collections {
    users: HashMap<ObjectId, User>,
    profiles: HashMap<ObjectId, Profile>,
    refresh_tokens: Vec<RefreshTokenRecord>,
}

/// 프로세스 내 메모리 저장소
#[derive(Default)]
pub struct InMemoryStore {
    inner: RwLock<Collections>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Collections>> {
        self.inner
            .read()
            .map_err(|_| AppError::InternalError("메모리 저장소 잠금 실패".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Collections>> {
        self.inner
            .write()
            .map_err(|_| AppError::InternalError("메모리 저장소 잠금 실패".to_string()))
    }

    /// 저장된 사용자 수
    pub fn user_count(&self) -> usize {
        self.read().map(|c| c.users.len()).unwrap_or_default()
    }

    /// 저장된 프로필 수
    pub fn profile_count(&self) -> usize {
        self.read().map(|c| c.profiles.len()).unwrap_or_default()
    }

    /// 저장된 리프레시 토큰 기록 수
    pub fn refresh_token_count(&self) -> usize {
        self.read().map(|c| c.refresh_tokens.len()).unwrap_or_default()
    }

    /// 사용자 활성화 여부 변경 (서비스 외부에서 계정을 비활성화하는 상황 재현용)
    pub fn set_active(&self, id: &ObjectId, active: bool) -> AppResult<bool> {
        let mut collections = self.write()?;
        match collections.users.get_mut(id) {
            Some(user) => {
                user.is_active = active;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let collections = self.read()?;
        Ok(collections.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<User>> {
        let collections = self.read()?;
        Ok(collections.users.values().find(|u| u.name == name).cloned())
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        let collections = self.read()?;
        Ok(collections.users.get(id).cloned())
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let mut collections = self.write()?;

        let duplicate = collections
            .users
            .values()
            .any(|u| u.email == user.email || u.name == user.name);
        if duplicate {
            return Err(AppError::ConflictError(
                "This email or name already exists".to_string(),
            ));
        }

        let id = *user.id.get_or_insert_with(ObjectId::new);
        collections.users.insert(id, user.clone());

        Ok(user)
    }

    async fn update(&self, id: &ObjectId, changes: UserChanges) -> AppResult<Option<User>> {
        let mut collections = self.write()?;

        Ok(collections.users.get_mut(id).map(|user| {
            changes.apply(user);
            user.clone()
        }))
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let mut collections = self.write()?;
        Ok(collections.users.remove(id).is_some())
    }
}

#[async_trait]
impl ProfileStore for InMemoryStore {
    async fn create(&self, mut profile: Profile) -> AppResult<Profile> {
        let mut collections = self.write()?;

        let id = *profile.id.get_or_insert_with(ObjectId::new);
        collections.profiles.insert(id, profile.clone());

        Ok(profile)
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let mut collections = self.write()?;
        Ok(collections.profiles.remove(id).is_some())
    }
}

#[async_trait]
impl RefreshTokenStore for InMemoryStore {
    async fn find_by_user_id(&self, user_id: &ObjectId) -> AppResult<Option<RefreshTokenRecord>> {
        let collections = self.read()?;
        Ok(collections
            .refresh_tokens
            .iter()
            .find(|r| r.user_id == *user_id)
            .cloned())
    }

    async fn create(&self, mut record: RefreshTokenRecord) -> AppResult<bool> {
        let mut collections = self.write()?;

        if collections.refresh_tokens.iter().any(|r| r.user_id == record.user_id) {
            return Ok(false);
        }

        record.id.get_or_insert_with(ObjectId::new);
        collections.refresh_tokens.push(record);

        Ok(true)
    }

    async fn delete_all_by_user_id(&self, user_id: &ObjectId) -> AppResult<u64> {
        let mut collections = self.write()?;

        let before = collections.refresh_tokens.len();
        collections.refresh_tokens.retain(|r| r.user_id != *user_id);

        Ok((before - collections.refresh_tokens.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str, name: &str) -> User {
        User::new_local(ObjectId::new(), email.to_string(), name.to_string(), "hash".to_string())
    }

    #[actix_web::test]
    async fn test_unique_email_and_name() {
        let store = InMemoryStore::new();
        UserStore::create(&store, user("a@x.com", "alice")).await.unwrap();

        let same_email = UserStore::create(&store, user("a@x.com", "bob")).await;
        let same_name = UserStore::create(&store, user("b@x.com", "alice")).await;

        assert!(matches!(same_email, Err(AppError::ConflictError(_))));
        assert!(matches!(same_name, Err(AppError::ConflictError(_))));
        assert_eq!(store.user_count(), 1);
    }

    #[actix_web::test]
    async fn test_one_refresh_record_per_user() {
        let store = InMemoryStore::new();
        let user_id = ObjectId::new();

        assert!(RefreshTokenStore::create(&store, RefreshTokenRecord::new(user_id, "t1")).await.unwrap());
        assert!(!RefreshTokenStore::create(&store, RefreshTokenRecord::new(user_id, "t2")).await.unwrap());

        let record = store.find_by_user_id(&user_id).await.unwrap().unwrap();
        assert_eq!(record.token, "t1");
        assert_eq!(store.delete_all_by_user_id(&user_id).await.unwrap(), 1);
        assert_eq!(store.delete_all_by_user_id(&user_id).await.unwrap(), 0);
    }
}
