//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈입니다.
//!
//! ```text
//! domain/
//! ├── entities/   ← MongoDB 문서와 매핑되는 엔티티 (User, Profile, RefreshTokenRecord)
//! ├── models/     ← 저장되지 않는 값 객체 (TokenClaims, TokenKind, AuthenticatedUser)
//! └── dto/        ← HTTP 요청/응답 구조체
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{Profile, RefreshTokenRecord, User, UserChanges};
pub use dto::{
    ApiResponse, AuthResponse, RefreshTokenRequest, RefreshTokenResponse, SignInRequest,
    SignUpRequest, UserResponse,
};
pub use models::{AuthenticatedUser, TokenClaims, TokenKind, TokenPair};
