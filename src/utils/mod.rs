//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 요청 입력값 검증/정리
//! - [`display_terminal`] - 부팅 과정 터미널 출력

pub mod string_utils;
pub mod display_terminal;
