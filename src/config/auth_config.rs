//! # Authentication Configuration Module
//!
//! 세션 토큰 서명 키와 토큰 수명을 관리하는 모듈입니다.
//! 프로세스 전역 상태 대신 `JwtConfig` 값을 만들어 `TokenService`
//! 생성자에 직접 주입합니다.
//!
//! ## 환경 변수 설정
//!
//! ```bash
//! # 액세스 토큰 서명 키
//! export JWT_ACCESS_SECRET="your-super-secret-access-key"
//!
//! # 리프레시 토큰 서명 키 (없으면 액세스 키를 사용)
//! export JWT_REFRESH_SECRET="your-super-secret-refresh-key"
//! ```
//!
//! ## 토큰 수명
//!
//! | 발급 시점 | 종류 | 수명 |
//! |-----------|------|------|
//! | 회원가입 | access | 8시간 |
//! | 로그인 | access | 1시간 |
//! | 토큰 갱신 | access | 1시간 |
//! | 회원가입/로그인 | refresh | 24시간 |

use std::env;
use chrono::Duration;

const DEV_SECRET: &str = "organic-food-dev-secret";

/// JWT 서명 및 수명 설정
///
/// 액세스 토큰과 리프레시 토큰은 서로 다른 키로 서명됩니다.
/// 따라서 한 종류의 토큰을 다른 종류의 키로 검증하면 서명 단계에서 실패합니다.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// 액세스 토큰 서명 키
    pub access_secret: String,
    /// 리프레시 토큰 서명 키
    pub refresh_secret: String,
    /// 회원가입 시 발급하는 액세스 토큰 수명
    pub signup_access_ttl: Duration,
    /// 로그인/갱신 시 발급하는 액세스 토큰 수명
    pub access_ttl: Duration,
    /// 리프레시 토큰 수명
    pub refresh_ttl: Duration,
}

impl JwtConfig {
    /// 두 서명 키로 기본 수명 설정을 만듭니다.
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            signup_access_ttl: Duration::hours(8),
            access_ttl: Duration::hours(1),
            refresh_ttl: Duration::hours(24),
        }
    }

    /// 환경 변수에서 서명 키를 읽어옵니다.
    ///
    /// `JWT_ACCESS_SECRET`이 없으면 개발용 기본 키를 사용하며 경고를 남깁니다.
    /// `JWT_REFRESH_SECRET`이 없으면 액세스 키를 재사용합니다.
    pub fn from_env() -> Self {
        let access_secret = env::var("JWT_ACCESS_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_ACCESS_SECRET not set, using default (not secure for production!)");
            DEV_SECRET.to_string()
        });

        let refresh_secret = env::var("JWT_REFRESH_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_REFRESH_SECRET not set, reusing JWT_ACCESS_SECRET");
            access_secret.clone()
        });

        Self::new(access_secret, refresh_secret)
    }
}
