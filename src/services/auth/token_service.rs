//! 세션 토큰 발급/검증 서비스 구현
//!
//! HS256 JSON Web Token으로 액세스 토큰과 리프레시 토큰을 만들고 검증합니다.
//! 토큰 종류마다 서명 키가 다르며, 클레임의 `type` 필드로 종류를 한 번 더 확인합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use crate::{
    config::JwtConfig,
    domain::models::token::{TokenClaims, TokenKind},
    errors::{AppError, AppResult, ErrorContext},
};

const INVALID_TOKEN: &str = "Invalid or expired token";
const PERMISSION_DENIED: &str = "Access permission denied!";

/// 세션 토큰 서비스
///
/// `JwtConfig`를 생성자로 주입받아 보관합니다.
/// `web::Data`로 공유되며 미들웨어와 `AuthService`가 함께 사용합니다.
#[derive(Debug, Clone)]
pub struct TokenService {
    config: JwtConfig,
}

impl TokenService {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &JwtConfig {
        &self.config
    }

    fn secret_for(&self, kind: TokenKind) -> &str {
        match kind {
            TokenKind::Access => &self.config.access_secret,
            TokenKind::Refresh => &self.config.refresh_secret,
        }
    }

    /// 토큰 발급
    ///
    /// # Arguments
    ///
    /// * `user_id` - 토큰 주체 (사용자 ObjectId 16진수 문자열)
    /// * `kind` - 토큰 종류. 서명 키가 종류에 따라 선택됩니다.
    /// * `ttl` - 토큰 수명
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 서명 실패
    ///
    /// ```rust,ignore
    /// let access = token_service.issue(&user_id, TokenKind::Access, Duration::hours(1))?;
    /// ```
    pub fn issue(&self, user_id: &str, kind: TokenKind, ttl: Duration) -> AppResult<String> {
        let now = Utc::now();

        let claims = TokenClaims {
            id: user_id.to_string(),
            kind,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret_for(kind).as_bytes());

        encode(&Header::default(), &claims, &encoding_key)
            .with_context(|| format!("{} 토큰 생성 실패", kind.as_str()))
    }

    /// 토큰 검증 및 클레임 추출
    ///
    /// `expected` 종류의 키로 서명과 만료를 검증한 뒤 클레임의 종류를 확인합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 서명 불일치, 만료, 형식 오류
    /// * `AppError::AuthorizationError` - 다른 종류의 토큰
    pub fn verify(&self, token: &str, expected: TokenKind) -> AppResult<TokenClaims> {
        let claims = match self.decode_with(token, expected) {
            Ok(claims) => claims,
            Err(e) if matches!(e.kind(), ErrorKind::InvalidSignature) => {
                // 다른 종류의 키로 서명된 토큰이면 종류 오류로 처리
                let other = match expected {
                    TokenKind::Access => TokenKind::Refresh,
                    TokenKind::Refresh => TokenKind::Access,
                };
                return match self.decode_with(token, other) {
                    Ok(claims) if claims.kind != expected => {
                        log::warn!("토큰 종류 불일치 - expected: {}, actual: {}", expected.as_str(), claims.kind.as_str());
                        Err(AppError::AuthorizationError(PERMISSION_DENIED.to_string()))
                    }
                    _ => Err(AppError::AuthenticationError(INVALID_TOKEN.to_string())),
                };
            }
            Err(e) => {
                log::debug!("토큰 검증 실패: {}", e);
                return Err(AppError::AuthenticationError(INVALID_TOKEN.to_string()));
            }
        };

        if claims.kind != expected {
            log::warn!("토큰 종류 불일치 - expected: {}, actual: {}", expected.as_str(), claims.kind.as_str());
            return Err(AppError::AuthorizationError(PERMISSION_DENIED.to_string()));
        }

        Ok(claims)
    }

    fn decode_with(&self, token: &str, kind: TokenKind) -> Result<TokenClaims, jsonwebtoken::errors::Error> {
        let decoding_key = DecodingKey::from_secret(self.secret_for(kind).as_bytes());
        // 만료 시각을 유예 없이 적용 (jsonwebtoken 기본값은 60초)
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|data| data.claims)
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 헤더 형식 또는 빈 토큰
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_ID: &str = "507f1f77bcf86cd799439011";

    fn service() -> TokenService {
        TokenService::new(JwtConfig::new("access-secret", "refresh-secret"))
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let service = service();
        let token = service.issue(USER_ID, TokenKind::Access, Duration::hours(1)).unwrap();

        let claims = service.verify(&token, TokenKind::Access).unwrap();
        assert_eq!(claims.id, USER_ID);
        assert_eq!(claims.kind, TokenKind::Access);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_wrong_kind_is_forbidden() {
        let service = service();
        let access = service.issue(USER_ID, TokenKind::Access, Duration::hours(1)).unwrap();
        let refresh = service.issue(USER_ID, TokenKind::Refresh, Duration::hours(24)).unwrap();

        assert!(matches!(service.verify(&access, TokenKind::Refresh), Err(AppError::AuthorizationError(_))));
        assert!(matches!(service.verify(&refresh, TokenKind::Access), Err(AppError::AuthorizationError(_))));
    }

    #[test]
    fn test_wrong_kind_with_shared_secret_is_forbidden() {
        let service = TokenService::new(JwtConfig::new("shared", "shared"));
        let access = service.issue(USER_ID, TokenKind::Access, Duration::hours(1)).unwrap();

        let err = service.verify(&access, TokenKind::Refresh).unwrap_err();
        assert!(matches!(err, AppError::AuthorizationError(ref m) if m == "Access permission denied!"));
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let service = service();
        let token = service.issue(USER_ID, TokenKind::Refresh, Duration::hours(24)).unwrap();
        let forged = service.issue("507f191e810c19729de860ea", TokenKind::Refresh, Duration::hours(24)).unwrap();

        // 서명은 그대로 두고 payload만 교체
        let parts: Vec<&str> = token.split('.').collect();
        let forged_payload = forged.split('.').nth(1).unwrap();
        let tampered = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);

        assert!(matches!(service.verify(&tampered, TokenKind::Refresh), Err(AppError::AuthenticationError(_))));
        assert!(matches!(service.verify("not-a-jwt", TokenKind::Refresh), Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = service();
        let token = service.issue(USER_ID, TokenKind::Refresh, Duration::hours(-1)).unwrap();

        let err = service.verify(&token, TokenKind::Refresh).unwrap_err();
        assert!(matches!(err, AppError::AuthenticationError(ref m) if m == "Invalid or expired token"));
    }

    #[test]
    fn test_expiry_has_no_leeway() {
        let service = service();
        let token = service.issue(USER_ID, TokenKind::Access, Duration::seconds(-5)).unwrap();

        assert!(matches!(service.verify(&token, TokenKind::Access), Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_foreign_secret_is_rejected() {
        let other = TokenService::new(JwtConfig::new("x", "y"));
        let token = other.issue(USER_ID, TokenKind::Refresh, Duration::hours(24)).unwrap();

        assert!(matches!(service().verify(&token, TokenKind::Refresh), Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = service();

        assert_eq!(service.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("Bearer ").is_err());
    }
}
