//! HTTP 요청 핸들러 모듈
//!
//! - [`auth`] - 회원가입/로그인/토큰 갱신/로그아웃

pub mod auth;
