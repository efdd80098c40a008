//! # Organic Auth Backend
//!
//! 이메일/비밀번호 계정의 회원가입, 로그인, 토큰 갱신, 로그아웃을 제공하는
//! actix-web + MongoDB 인증 백엔드입니다.
//!
//! ```text
//! routes → handlers → services → repositories → MongoDB
//!                  ↘ middlewares (액세스 토큰 검증)
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
