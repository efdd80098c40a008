//! HTTP 미들웨어 모듈
//!
//! - [`AuthMiddleware`] - 액세스 토큰 필수 인증

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
