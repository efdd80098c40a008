//! API 라우트 설정 모듈
//!
//! 헬스체크와 `/api/v1/auth` 스코프를 등록합니다.
//! 로그아웃 엔드포인트만 `AuthMiddleware`로 보호되며, 핸들러 속성
//! (`#[post("/signout", wrap = ...)]`)에서 직접 감쌉니다.
//!
//! `configure_all_routes`를 쓰는 `App`에는 `web::Data<AuthService>`와
//! `web::Data<TokenService>`가 등록되어 있어야 합니다.
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(auth_service.clone())
//!     .app_data(token_service.clone())
//!     .configure(configure_all_routes)
//! ```

use crate::handlers;
use actix_web::{get, web, HttpResponse};
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_auth_routes(cfg);
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::signup)
            .service(handlers::auth::signin)
            .service(handlers::auth::refresh_token)
            .service(handlers::auth::signout)
    );
}

/// 헬스체크 엔드포인트
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "organic_auth_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z"
/// }
/// ```
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
