//! 리프레시 토큰 기록(Refresh Token Ledger) 데이터 액세스 계층

pub mod token_repository;

pub use token_repository::{MongoRefreshTokenRepository, RefreshTokenStore};
