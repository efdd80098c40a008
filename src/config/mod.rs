//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값을 `main`에서 한 번 읽어 구조체로 만들고,
//! 각 컴포넌트의 생성자에 명시적으로 전달합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, 해싱, Rate Limit, CORS 설정
//! - [`auth_config`] - JWT 서명 키와 토큰 수명 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="5000"
//!
//! # 데이터베이스
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="organic_food"
//!
//! # JWT 설정
//! export JWT_ACCESS_SECRET="your-access-secret"
//! export JWT_REFRESH_SECRET="your-refresh-secret"
//!
//! # 보안 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//! export CORS_ALLOWED_ORIGINS="https://shop.example.com"  # 비우면 모든 출처 허용
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
