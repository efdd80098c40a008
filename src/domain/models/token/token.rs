//! JWT 세션 토큰 클레임과 토큰 쌍
//!
//! 세션 토큰은 저장되지 않는 자기완결적 bearer 자격 증명입니다.
//! 주체 ID, 토큰 종류(access/refresh), 만료 시간을 담습니다.
use serde::{Deserialize, Serialize};

/// 토큰 종류
///
/// 리프레시 토큰은 액세스 토큰이 필요한 곳에서 절대 허용되지 않으며,
/// 그 반대도 마찬가지입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// API 호출용 단기 토큰
    Access,
    /// 새 액세스 토큰 발급 전용 장기 토큰
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

/// JWT 토큰의 클레임(Payload) 구조체
///
/// - `id`: 토큰의 주체 (사용자 ObjectId 16진수 문자열)
/// - `type`: 토큰 종류
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 ID
    pub id: String,
    /// 토큰 종류
    #[serde(rename = "type")]
    pub kind: TokenKind,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

/// JWT 토큰 쌍 구조체
///
/// 회원가입과 로그인 응답으로 클라이언트에게 전달됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용 단기 토큰)
    pub access_token: String,
    /// 리프레시 토큰 (토큰 갱신용 장기 토큰)
    pub refresh_token: String,
}
