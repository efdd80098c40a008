//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 전역 레지스트리 없이 `main`에서 생성자로 조립되고
//! `web::Data`로 핸들러와 미들웨어에 공유됩니다.

pub mod auth;
