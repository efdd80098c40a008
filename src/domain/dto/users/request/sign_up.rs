//! # 회원가입 요청 DTO
//!
//! 새 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 형식 검증은 `validator`가, 비밀번호 확인 일치 여부와 중복 검사는
//! 서비스 계층이 담당합니다.
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "email": "a@x.com",
//!   "name": "alice",
//!   "password": "p1",
//!   "confirmpassword": "p1"
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 회원가입 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignUpRequest {
    /// 로그인 식별자로 쓰이는 이메일 (시스템 내 유일)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 사용자 이름 (시스템 내 유일)
    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub name: String,

    /// 계정 비밀번호. 해싱 후 저장되며 평문으로 보관하지 않음
    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,

    /// 비밀번호 확인. `password`와 정확히 일치해야 함
    pub confirmpassword: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, name: &str) -> SignUpRequest {
        SignUpRequest {
            email: email.to_string(),
            name: name.to_string(),
            password: "p1".to_string(),
            confirmpassword: "p2".to_string(),
        }
    }

    #[test]
    fn test_valid_shape_passes_even_if_confirmation_differs() {
        // 확인 비밀번호 비교는 서비스 계층 책임
        assert!(request("a@x.com", "alice").validate().is_ok());
    }

    #[test]
    fn test_invalid_email_rejected() {
        assert!(request("not-an-email", "alice").validate().is_err());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(request("a@x.com", "").validate().is_err());
    }
}
