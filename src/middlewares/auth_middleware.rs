//! # 인증 미들웨어
//!
//! `Authorization: Bearer <jwt>` 헤더의 액세스 토큰을 검증하고,
//! 성공하면 [`AuthenticatedUser`](crate::domain::models::AuthenticatedUser)를
//! 요청 extensions에 저장합니다.
//!
//! | 상황 | 응답 |
//! |------|------|
//! | 헤더 없음 / 형식 오류 / 서명·만료 오류 | 401 |
//! | 리프레시 토큰 사용 | 403 |
//!
//! ```rust,ignore
//! web::resource("/signout")
//!     .wrap(AuthMiddleware::required())
//!     .route(web::post().to(signout))
//! ```
//!
//! `TokenService`는 `App::app_data(web::Data<TokenService>)`로 등록되어 있어야 합니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 액세스 토큰 필수 미들웨어
#[derive(Debug, Clone, Default)]
pub struct AuthMiddleware;

impl AuthMiddleware {
    pub fn required() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
