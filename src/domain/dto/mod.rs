//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이를 오가는 요청/응답 구조체입니다.

pub mod users;
pub mod tokens;

pub use users::{AuthResponse, SignInRequest, SignUpRequest, UserResponse};
pub use tokens::{ApiResponse, RefreshTokenRequest, RefreshTokenResponse};
