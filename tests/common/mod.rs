//! 통합 테스트 공용 도구
//!
//! MongoDB 대신 `InMemoryStore`를 주입한 `AuthService`를 만듭니다.
#![allow(dead_code)]

use std::sync::Arc;
use actix_web::web;
use organic_auth_backend::{
    config::{JwtConfig, PasswordConfig},
    domain::dto::{SignInRequest, SignUpRequest},
    repositories::{memory::InMemoryStore, tokens::RefreshTokenStore, users::ProfileStore},
    services::auth::{AuthService, PasswordService, TokenService},
};

pub const ACCESS_SECRET: &str = "test-access-secret";
pub const REFRESH_SECRET: &str = "test-refresh-secret";

pub struct TestContext {
    pub store: Arc<InMemoryStore>,
    pub tokens: TokenService,
    pub auth: web::Data<AuthService>,
}

impl TestContext {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self::build(store.clone(), store.clone(), store)
    }

    /// 프로필 저장소만 교체한 컨텍스트
    pub fn with_profiles(profiles: Arc<dyn ProfileStore>) -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self::build(store.clone(), profiles, store)
    }

    /// 리프레시 토큰 저장소만 교체한 컨텍스트
    pub fn with_refresh_tokens(refresh_tokens: Arc<dyn RefreshTokenStore>) -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self::build(store.clone(), store, refresh_tokens)
    }

    fn build(
        store: Arc<InMemoryStore>,
        profiles: Arc<dyn ProfileStore>,
        refresh_tokens: Arc<dyn RefreshTokenStore>,
    ) -> Self {
        let tokens = TokenService::new(JwtConfig::new(ACCESS_SECRET, REFRESH_SECRET));
        let passwords = PasswordService::new(&PasswordConfig::new(4));

        let auth = AuthService::new(
            store.clone(),
            profiles,
            refresh_tokens,
            tokens.clone(),
            passwords,
        );

        Self {
            store,
            tokens,
            auth: web::Data::new(auth),
        }
    }
}

pub fn signup_request(email: &str, name: &str, password: &str, confirm: &str) -> SignUpRequest {
    SignUpRequest {
        email: email.to_string(),
        name: name.to_string(),
        password: password.to_string(),
        confirmpassword: confirm.to_string(),
    }
}

pub fn signin_request(email: &str, password: &str) -> SignInRequest {
    SignInRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}
