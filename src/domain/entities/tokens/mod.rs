//! Token Entity Module
//!
//! 서버 측 리프레시 토큰 기록(Refresh Token Ledger) 엔티티를 정의합니다.

pub mod refresh_token;

pub use refresh_token::RefreshTokenRecord;
