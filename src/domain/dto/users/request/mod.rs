//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! `validator` 크레이트로 형식을 검증합니다.
//!
//! 검증 실패 시 `validator::ValidationErrors`가 발생하며,
//! 이는 `AppError::ValidationError`(422)로 변환됩니다.

pub mod sign_up;
pub mod auth_request;

pub use sign_up::SignUpRequest;
pub use auth_request::SignInRequest;
