//! Authentication HTTP Handlers
//!
//! 회원가입, 로그인, 토큰 갱신, 로그아웃 엔드포인트입니다.
//! 요청 본문은 `validator`로 형식 검증을 거친 뒤 [`AuthService`]에 위임됩니다.
//!
//! | Method | Path | 응답 |
//! |--------|------|------|
//! | POST | `/api/v1/auth/signup` | 201 `AuthResponse` |
//! | POST | `/api/v1/auth/signin` | 200 `AuthResponse` |
//! | POST | `/api/v1/auth/refresh-token` | 200 `{ "token": ... }` |
//! | POST | `/api/v1/auth/signout` | 200 `ApiResponse` (액세스 토큰 필요) |
use actix_web::{post, web, HttpResponse};
use validator::Validate;
use crate::{
    domain::{
        dto::{ApiResponse, RefreshTokenRequest, SignInRequest, SignUpRequest},
        models::AuthenticatedUser,
    },
    errors::AppError,
    middlewares::AuthMiddleware,
    services::auth::AuthService,
};

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /api/v1/auth/signup`
///
/// # Request Body
/// ```json
/// { "email": "a@x.com", "name": "alice", "password": "p1", "confirmpassword": "p1" }
/// ```
#[post("/signup")]
pub async fn signup(
    auth_service: web::Data<AuthService>,
    payload: web::Json<SignUpRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = auth_service.signup(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 로그인 핸들러
///
/// # Endpoint
/// `POST /api/v1/auth/signin`
#[post("/signin")]
pub async fn signin(
    auth_service: web::Data<AuthService>,
    payload: web::Json<SignInRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = auth_service.signin(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 액세스 토큰 재발급 핸들러
///
/// # Endpoint
/// `POST /api/v1/auth/refresh-token`
///
/// # Request Body
/// ```json
/// { "refreshToken": "eyJhbGciOiJIUzI1NiIs..." }
/// ```
#[post("/refresh-token")]
pub async fn refresh_token(
    auth_service: web::Data<AuthService>,
    payload: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = auth_service.refresh_token(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 로그아웃 핸들러
///
/// 미들웨어가 검증한 액세스 토큰의 사용자 ID로 리프레시 토큰 기록을 삭제합니다.
///
/// # Endpoint
/// `POST /api/v1/auth/signout`
#[post("/signout", wrap = "AuthMiddleware::required()")]
pub async fn signout(
    auth_service: web::Data<AuthService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let message = auth_service.signout(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message(message)))
}
