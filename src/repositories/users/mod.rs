//! 사용자/프로필 데이터 액세스 계층
//!
//! [`UserStore`](user_repo::UserStore)와 [`ProfileStore`](profile_repo::ProfileStore)
//! 인터페이스, 그리고 MongoDB 구현체를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{MongoUserRepository, UserStore};
//!
//! let users = MongoUserRepository::new(database.clone());
//! let user = users.find_by_email("a@x.com").await?;
//! ```

pub mod user_repo;
pub mod profile_repo;

pub use user_repo::{MongoUserRepository, UserStore};
pub use profile_repo::{MongoProfileRepository, ProfileStore};
