//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 저장소는 `async_trait` 인터페이스로 정의되고, 서비스는
//! `Arc<dyn …>` 핸들을 생성자로 주입받습니다.
//!
//! - [`users`] - `UserStore`, `ProfileStore` 와 MongoDB 구현
//! - [`tokens`] - `RefreshTokenStore` 와 MongoDB 구현
//! - [`memory`] - 프로세스 내 메모리 구현 (테스트 및 로컬 실행용)
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::{users::MongoUserRepository, tokens::MongoRefreshTokenRepository};
//!
//! let users = Arc::new(MongoUserRepository::new(database.clone()));
//! let refresh_tokens = Arc::new(MongoRefreshTokenRepository::new(database.clone()));
//! ```

use mongodb::error::{ErrorKind, WriteFailure};

pub mod users;
pub mod tokens;
pub mod memory;

/// MongoDB 유니크 인덱스 위반(E11000) 여부
pub(crate) fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == 11000,
        _ => false,
    }
}
