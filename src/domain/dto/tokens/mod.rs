//! 토큰 갱신/로그아웃 DTO

pub mod request;
pub mod response;

pub use request::RefreshTokenRequest;
pub use response::{ApiResponse, RefreshTokenResponse};
