//! bcrypt 비밀번호 해싱 서비스
//!
//! 해싱과 검증은 CPU를 오래 점유하므로 `web::block`으로 블로킹 스레드 풀에서 실행합니다.
//! 요청 태스크는 그동안 대기 상태로 전환되어 워커 스레드를 막지 않습니다.

use std::time::Instant;
use actix_web::web;
use crate::{
    config::PasswordConfig,
    errors::{AppError, AppResult},
};

/// 비밀번호 해셔
#[derive(Debug, Clone)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    pub fn new(config: &PasswordConfig) -> Self {
        Self { cost: config.bcrypt_cost }
    }

    /// 평문 비밀번호를 bcrypt 다이제스트로 변환
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 해싱 실패 또는 블로킹 풀 오류
    pub async fn hash(&self, plain: &str) -> AppResult<String> {
        let plain = plain.to_string();
        let cost = self.cost;
        let started = Instant::now();

        let digest = web::block(move || bcrypt::hash(plain, cost))
            .await
            .map_err(|e| AppError::InternalError(format!("블로킹 작업 실패: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        log::debug!("Password hashing took: {:?}", started.elapsed());

        Ok(digest)
    }

    /// 평문 비밀번호와 저장된 다이제스트 비교
    ///
    /// 불일치는 `Ok(false)`, 다이제스트 형식 오류는 `InternalError`입니다.
    pub async fn verify(&self, plain: &str, digest: &str) -> AppResult<bool> {
        let plain = plain.to_string();
        let digest = digest.to_string();
        let started = Instant::now();

        let matched = web::block(move || bcrypt::verify(plain, &digest))
            .await
            .map_err(|e| AppError::InternalError(format!("블로킹 작업 실패: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        log::debug!("Password verification took: {:?}", started.elapsed());

        Ok(matched)
    }
}
