//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티들을 정의하는 모듈입니다.
//!
//! - [`user::User`] - 이메일/이름/비밀번호 해시와 현재 리프레시 토큰
//! - [`profile::Profile`] - 회원가입 시 생성되는 빈 프로필
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use mongodb::bson::oid::ObjectId;
//! use crate::domain::entities::users::{User, Profile};
//!
//! let user_id = ObjectId::new();
//! let user = User::new_local(user_id, email, name, hashed_password);
//! let profile = Profile::empty_for(user_id);
//! ```

pub mod user;
pub mod profile;

pub use user::{User, UserChanges};
pub use profile::Profile;
