//! 인증 서비스 모듈
//!
//! - [`TokenService`] - HS256 세션 토큰 발급/검증
//! - [`PasswordService`] - bcrypt 비밀번호 해싱
//! - [`AuthService`] - 회원가입/로그인/토큰 갱신/로그아웃 오케스트레이터
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{AuthService, PasswordService, TokenService};
//!
//! let tokens = TokenService::new(JwtConfig::from_env());
//! let passwords = PasswordService::new(&PasswordConfig::from_env());
//! let auth = AuthService::new(users, profiles, refresh_tokens, tokens, passwords);
//! ```

pub mod token_service;
pub mod password_service;
pub mod auth_service;

pub use token_service::TokenService;
pub use password_service::PasswordService;
pub use auth_service::AuthService;
