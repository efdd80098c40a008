//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경 및 보안 관련 설정을 관리합니다.
//! 모든 설정은 `from_env()`로 한 번 읽어 구조체로 만든 뒤
//! 생성자를 통해 각 컴포넌트에 주입됩니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let value = env::var("ENVIRONMENT")
            .unwrap_or_else(|_| env::var("NODE_ENV").unwrap_or_else(|_| "production".to_string()));

        Self::from_str(&value)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 로그 출력용 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

/// 패스워드 해싱 설정
#[derive(Debug, Clone)]
pub struct PasswordConfig {
    /// bcrypt cost (4-15)
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    /// 주어진 cost로 설정을 만듭니다. 범위를 벗어나면 경계값으로 고정됩니다.
    pub fn new(bcrypt_cost: u32) -> Self {
        Self {
            bcrypt_cost: bcrypt_cost.clamp(4, 15),
        }
    }

    /// 환경 변수에서 bcrypt cost를 읽어옵니다.
    ///
    /// # Environment Variables
    ///
    /// - `BCRYPT_COST`: 4-15 범위의 정수. 없거나 범위를 벗어나면 환경별 기본값 사용
    pub fn from_env() -> Self {
        let from_var = env::var("BCRYPT_COST")
            .ok()
            .and_then(|cost_str| cost_str.parse::<u32>().ok())
            .filter(|cost| (4..=15).contains(cost));

        let bcrypt_cost = match from_var {
            Some(cost) => cost,
            None => Self::bcrypt_cost_for_env(&Environment::current()),
        };

        Self { bcrypt_cost }
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// MongoDB 연결 URI
    pub uri: String,
    /// 사용할 데이터베이스 이름
    pub database_name: String,
}

impl DatabaseConfig {
    /// 환경 변수에서 연결 정보를 읽어옵니다.
    ///
    /// - `MONGODB_URI`: 기본값 "mongodb://localhost:27017"
    /// - `DATABASE_NAME`: 기본값 "organic_food_dev"
    pub fn from_env() -> Self {
        Self {
            uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: env::var("DATABASE_NAME")
                .unwrap_or_else(|_| "organic_food_dev".to_string()),
        }
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// 환경 변수에서 바인딩 주소를 읽어옵니다.
    ///
    /// - `HOST`: 기본값 "0.0.0.0" (모든 인터페이스)
    /// - `PORT`: 기본값 5000
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .unwrap_or(5000);

        Self { host, port }
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Rate Limiting 설정 구조체
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        Self {
            per_second,
            burst_size,
        }
    }
}

/// CORS 허용 출처 설정
///
/// `allowed_origins`가 `None`이면 모든 출처를 허용합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct CorsConfig {
    pub allowed_origins: Option<Vec<String>>,
}

impl CorsConfig {
    /// 환경변수에서 CORS 설정을 로드합니다
    ///
    /// * `CORS_ALLOWED_ORIGINS` - 쉼표로 구분한 출처 목록. 비어 있거나 `*`이면 모든 출처 허용
    pub fn from_env() -> Self {
        Self::parse(env::var("CORS_ALLOWED_ORIGINS").ok().as_deref())
    }

    pub fn parse(value: Option<&str>) -> Self {
        let origins: Vec<String> = value
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
            return Self { allowed_origins: None };
        }

        Self { allowed_origins: Some(origins) }
    }
}
