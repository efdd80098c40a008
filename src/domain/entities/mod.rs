//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 엔티티들을 정의합니다.
//!
//! ```text
//! entities/
//! ├── users/          ← User, Profile
//! └── tokens/         ← RefreshTokenRecord
//! ```
//!
//! 모든 엔티티는 다음 특징을 가집니다:
//! - **BSON 직렬화**: `serde`와 `bson` 크레이트를 통한 자동 변환
//! - **ObjectId 지원**: MongoDB의 `_id` 필드와 매핑
//! - **ID 참조**: 엔티티 간 직접 참조 대신 `ObjectId` 참조 사용

pub mod users;
pub mod tokens;

pub use users::{Profile, User, UserChanges};
pub use tokens::RefreshTokenRecord;
