//! Organic Food 인증 서비스 메인 애플리케이션
//!
//! 설정을 읽어 MongoDB 연결과 서비스들을 생성자로 조립한 뒤
//! Actix-web HTTP 서버를 구동합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use organic_auth_backend::config::{
    CorsConfig, DatabaseConfig, Environment, JwtConfig, PasswordConfig, RateLimitConfig, ServerConfig,
};
use organic_auth_backend::db::Database;
use organic_auth_backend::errors::AppError;
use organic_auth_backend::repositories::{
    tokens::MongoRefreshTokenRepository,
    users::{MongoProfileRepository, MongoUserRepository},
};
use organic_auth_backend::routes::configure_all_routes;
use organic_auth_backend::services::auth::{AuthService, PasswordService, TokenService};
use organic_auth_backend::utils::display_terminal::{
    print_boxed_title, print_step_complete, print_step_start, print_sub_task,
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    load_env_file();
    init_logging();

    print_boxed_title("Organic Food Auth Service");
    info!("🚀 인증 서비스 시작중... (ENV: {})", Environment::current().as_str());

    print_step_start(1, "Loading configuration");
    let jwt_config = JwtConfig::from_env();
    let password_config = PasswordConfig::from_env();
    let database_config = DatabaseConfig::from_env();
    let server_config = ServerConfig::from_env();
    let rate_limit_config = RateLimitConfig::from_env();
    let cors_config = CorsConfig::from_env();
    print_sub_task("bcrypt cost", &password_config.bcrypt_cost.to_string());
    print_sub_task("database", &database_config.database_name);
    print_step_complete(1, "Configuration loaded");

    print_step_start(2, "Connecting to MongoDB");
    let database = Database::new(&database_config).await.map_err(startup_error)?;
    print_step_complete(2, "MongoDB connected");

    print_step_start(3, "Preparing collections");
    let users = MongoUserRepository::new(database.clone());
    let profiles = MongoProfileRepository::new(database.clone());
    let refresh_tokens = MongoRefreshTokenRepository::new(database);

    users.create_indexes().await.map_err(startup_error)?;
    print_sub_task("users", "email_unique, name_unique");
    refresh_tokens.create_indexes().await.map_err(startup_error)?;
    print_sub_task("refreshtokens", "user_id_unique");
    print_step_complete(3, "Indexes ready");

    let token_service = TokenService::new(jwt_config);
    let password_service = PasswordService::new(&password_config);
    let auth_service = AuthService::new(
        Arc::new(users),
        Arc::new(profiles),
        Arc::new(refresh_tokens),
        token_service.clone(),
        password_service,
    );

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(
        server_config,
        rate_limit_config,
        cors_config,
        web::Data::new(auth_service),
        web::Data::new(token_service),
    )
    .await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    server_config: ServerConfig,
    rate_limit_config: RateLimitConfig,
    cors_config: CorsConfig,
    auth_service: web::Data<AuthService>,
    token_service: web::Data<TokenService>,
) -> io::Result<()> {
    let bind_address = server_config.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Auth API: http://{}/api/v1/auth", bind_address);

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    match &cors_config.allowed_origins {
        Some(origins) => info!("🔓 CORS 허용 출처: {}", origins.join(", ")),
        None => info!("🔓 CORS: 모든 출처 허용"),
    }

    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&cors_config))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(auth_service.clone())
            .app_data(token_service.clone())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 초기화 실패를 프로세스 종료 오류로 변환합니다
fn startup_error(e: AppError) -> io::Error {
    error!("❌ 초기화 실패: {}", e);
    io::Error::other(e.to_string())
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    // 로거 초기화 전이므로 표준 출력 사용
    match loaded {
        Ok(file) => println!("Profile {}: {} 파일 로드 됨", profile, file),
        Err(e) => println!("Profile {}: 환경 파일 로드 실패 ({}), 프로세스 환경 변수 사용", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// `CORS_ALLOWED_ORIGINS`가 없으면 모든 출처를 허용합니다.
/// 출처를 명시한 경우에만 자격 증명(쿠키) 전송을 허용합니다.
fn configure_cors(cors_config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600);

    match &cors_config.allowed_origins {
        Some(origins) => origins
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin))
            .supports_credentials(),
        None => cors.allow_any_origin(),
    }
}
