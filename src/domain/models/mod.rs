//! # Domain Models Module
//!
//! 저장되지 않는 도메인 값 객체들을 정의합니다.
//!
//! - [`token`] - JWT 클레임, 토큰 종류, 토큰 쌍
//! - [`auth`] - 미들웨어가 요청에 붙이는 인증 사용자 정보

pub mod token;
pub mod auth;

pub use token::{TokenClaims, TokenKind, TokenPair};
pub use auth::AuthenticatedUser;
