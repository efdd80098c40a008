//! AuthService 통합 테스트
//!
//! 회원가입/로그인/토큰 갱신/로그아웃 흐름을 메모리 저장소 위에서 검증합니다.

mod common;

use std::sync::Arc;
use async_trait::async_trait;
use chrono::Duration;
use common::{signin_request, signup_request, TestContext};
use mongodb::bson::oid::ObjectId;
use organic_auth_backend::{
    domain::{
        dto::RefreshTokenRequest,
        entities::{Profile, RefreshTokenRecord},
        models::TokenKind,
    },
    errors::{AppError, AppResult},
    repositories::{
        tokens::RefreshTokenStore,
        users::{ProfileStore, UserStore},
    },
};

fn refresh_request(token: &str) -> RefreshTokenRequest {
    RefreshTokenRequest {
        refresh_token: token.to_string(),
    }
}

async fn signed_up(ctx: &TestContext) -> (String, String, String) {
    let response = ctx.auth
        .signup(signup_request("a@x.com", "alice", "p1", "p1"))
        .await
        .unwrap();

    (response.user.id, response.token.access_token, response.token.refresh_token)
}

#[actix_web::test]
async fn test_signup_creates_user_profile_and_refresh_record() {
    let ctx = TestContext::new();

    let response = ctx.auth
        .signup(signup_request("a@x.com", "alice", "p1", "p1"))
        .await
        .unwrap();

    assert_eq!(response.user.email, "a@x.com");
    assert_eq!(response.user.name, "alice");
    assert_eq!(response.user.avatar, "");
    assert!(response.user.is_active);
    assert!(response.user.info.is_some());

    assert_eq!(ctx.store.user_count(), 1);
    assert_eq!(ctx.store.profile_count(), 1);
    assert_eq!(ctx.store.refresh_token_count(), 1);

    let stored = ctx.store.find_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(stored.refresh_token.as_deref(), Some(response.token.refresh_token.as_str()));
    assert_eq!(stored.info.map(|id| id.to_hex()), response.user.info);

    let user_id = stored.id.unwrap();
    let record = ctx.store.find_by_user_id(&user_id).await.unwrap().unwrap();
    assert_eq!(record.token, response.token.refresh_token);
}

#[actix_web::test]
async fn test_signup_access_token_lives_eight_hours() {
    let ctx = TestContext::new();
    let (user_id, access, refresh) = signed_up(&ctx).await;

    let access_claims = ctx.tokens.verify(&access, TokenKind::Access).unwrap();
    assert_eq!(access_claims.id, user_id);
    assert_eq!(access_claims.exp - access_claims.iat, 8 * 3600);

    let refresh_claims = ctx.tokens.verify(&refresh, TokenKind::Refresh).unwrap();
    assert_eq!(refresh_claims.id, user_id);
    assert_eq!(refresh_claims.exp - refresh_claims.iat, 24 * 3600);
}

#[actix_web::test]
async fn test_signup_stores_hash_not_plaintext() {
    let ctx = TestContext::new();
    signed_up(&ctx).await;

    let stored = ctx.store.find_by_email("a@x.com").await.unwrap().unwrap();
    assert_ne!(stored.password, "p1");
    assert!(stored.password.starts_with("$2"));
}

#[actix_web::test]
async fn test_signup_password_mismatch_writes_nothing() {
    let ctx = TestContext::new();

    let err = ctx.auth
        .signup(signup_request("a@x.com", "alice", "p1", "p2"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::ValidationError(ref m) if m == "Confirmpassword is not match"));
    assert_eq!(ctx.store.user_count(), 0);
    assert_eq!(ctx.store.profile_count(), 0);
    assert_eq!(ctx.store.refresh_token_count(), 0);
}

#[actix_web::test]
async fn test_signup_duplicate_email_or_name_is_conflict() {
    let ctx = TestContext::new();
    signed_up(&ctx).await;

    let same_email = ctx.auth
        .signup(signup_request("a@x.com", "bob", "p1", "p1"))
        .await
        .unwrap_err();
    assert!(matches!(same_email, AppError::ConflictError(ref m) if m == "This email already exists"));

    let same_name = ctx.auth
        .signup(signup_request("b@x.com", "alice", "p1", "p1"))
        .await
        .unwrap_err();
    assert!(matches!(same_name, AppError::ConflictError(ref m) if m == "This name already exists"));

    assert_eq!(ctx.store.user_count(), 1);
    assert_eq!(ctx.store.profile_count(), 1);
    assert_eq!(ctx.store.refresh_token_count(), 1);
}

#[actix_web::test]
async fn test_signup_email_is_normalized() {
    let ctx = TestContext::new();
    signed_up(&ctx).await;

    let err = ctx.auth
        .signup(signup_request("  A@X.com ", "bob", "p1", "p1"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::ConflictError(ref m) if m == "This email already exists"));
}

#[actix_web::test]
async fn test_signin_returns_access_token_for_subject() {
    let ctx = TestContext::new();
    let (user_id, _, _) = signed_up(&ctx).await;

    let response = ctx.auth.signin(signin_request("a@x.com", "p1")).await.unwrap();

    let claims = ctx.tokens.verify(&response.token.access_token, TokenKind::Access).unwrap();
    assert_eq!(claims.id, user_id);
    assert_eq!(claims.kind, TokenKind::Access);
    assert_eq!(claims.exp - claims.iat, 3600);

    let stored = ctx.store.find_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(stored.refresh_token.as_deref(), Some(response.token.refresh_token.as_str()));

    // 기존 기록이 있으므로 새 기록을 만들지 않음
    assert_eq!(ctx.store.refresh_token_count(), 1);
}

#[actix_web::test]
async fn test_signin_unknown_email_is_not_found() {
    let ctx = TestContext::new();

    let err = ctx.auth.signin(signin_request("nobody@x.com", "p1")).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(ref m) if m == "This email was not found"));
}

#[actix_web::test]
async fn test_signin_wrong_password_is_checked_before_active_flag() {
    let ctx = TestContext::new();
    let (user_id, _, _) = signed_up(&ctx).await;

    let err = ctx.auth.signin(signin_request("a@x.com", "nope")).await.unwrap_err();
    assert!(matches!(err, AppError::ConflictError(ref m) if m == "Password not matching"));

    ctx.store.set_active(&ObjectId::parse_str(&user_id).unwrap(), false).unwrap();

    let err = ctx.auth.signin(signin_request("a@x.com", "nope")).await.unwrap_err();
    assert!(matches!(err, AppError::ConflictError(ref m) if m == "Password not matching"));

    let err = ctx.auth.signin(signin_request("a@x.com", "p1")).await.unwrap_err();
    assert!(matches!(err, AppError::ConflictError(ref m) if m == "This user was disabled"));
}

#[actix_web::test]
async fn test_signin_recreates_record_after_signout() {
    let ctx = TestContext::new();
    let (user_id, _, _) = signed_up(&ctx).await;

    ctx.auth.signout(&user_id).await.unwrap();
    assert_eq!(ctx.store.refresh_token_count(), 0);

    ctx.auth.signin(signin_request("a@x.com", "p1")).await.unwrap();
    assert_eq!(ctx.store.refresh_token_count(), 1);
}

#[actix_web::test]
async fn test_refresh_token_reissues_access_token() {
    let ctx = TestContext::new();
    let (user_id, _, refresh) = signed_up(&ctx).await;

    let response = ctx.auth.refresh_token(refresh_request(&refresh)).await.unwrap();

    let claims = ctx.tokens.verify(&response.token, TokenKind::Access).unwrap();
    assert_eq!(claims.id, user_id);
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[actix_web::test]
async fn test_refresh_token_rejects_access_token() {
    let ctx = TestContext::new();
    let (_, access, _) = signed_up(&ctx).await;

    let err = ctx.auth.refresh_token(refresh_request(&access)).await.unwrap_err();

    assert!(matches!(err, AppError::AuthorizationError(ref m) if m == "Access permission denied!"));
}

#[actix_web::test]
async fn test_refresh_token_rejects_expired_and_tampered_tokens() {
    let ctx = TestContext::new();
    let (user_id, _, refresh) = signed_up(&ctx).await;

    let expired = ctx.tokens.issue(&user_id, TokenKind::Refresh, Duration::hours(-1)).unwrap();
    let err = ctx.auth.refresh_token(refresh_request(&expired)).await.unwrap_err();
    assert!(matches!(err, AppError::AuthenticationError(_)));

    let mut parts: Vec<String> = refresh.split('.').map(str::to_string).collect();
    parts[2] = parts[2].chars().rev().collect();
    let tampered = parts.join(".");
    let err = ctx.auth.refresh_token(refresh_request(&tampered)).await.unwrap_err();
    assert!(matches!(err, AppError::AuthenticationError(_)));
}

#[actix_web::test]
async fn test_refresh_token_for_missing_or_inactive_user() {
    let ctx = TestContext::new();
    let (user_id, _, refresh) = signed_up(&ctx).await;

    let ghost = ObjectId::new().to_hex();
    let ghost_token = ctx.tokens.issue(&ghost, TokenKind::Refresh, Duration::hours(1)).unwrap();
    let err = ctx.auth.refresh_token(refresh_request(&ghost_token)).await.unwrap_err();
    assert!(matches!(err, AppError::ConflictError(ref m) if *m == format!("This user {} was not found", ghost)));

    let garbage = ctx.tokens.issue("not-an-object-id", TokenKind::Refresh, Duration::hours(1)).unwrap();
    let err = ctx.auth.refresh_token(refresh_request(&garbage)).await.unwrap_err();
    assert!(matches!(err, AppError::ConflictError(_)));

    ctx.store.set_active(&ObjectId::parse_str(&user_id).unwrap(), false).unwrap();
    let err = ctx.auth.refresh_token(refresh_request(&refresh)).await.unwrap_err();
    assert!(matches!(err, AppError::ConflictError(ref m) if *m == format!("This user {} was not active", user_id)));
}

#[actix_web::test]
async fn test_signout_is_idempotent() {
    let ctx = TestContext::new();
    let (user_id, _, _) = signed_up(&ctx).await;

    let message = ctx.auth.signout(&user_id).await.unwrap();
    assert_eq!(message, format!("Logged out user id {}", user_id));
    assert_eq!(ctx.store.refresh_token_count(), 0);

    let again = ctx.auth.signout(&user_id).await.unwrap();
    assert_eq!(again, message);
}

#[actix_web::test]
async fn test_signout_rejects_malformed_id() {
    let ctx = TestContext::new();

    let err = ctx.auth.signout("123").await.unwrap_err();

    assert!(matches!(err, AppError::BadRequest(ref m) if m == "User id 123 is not valid"));
}

/// 항상 실패하는 프로필 저장소
struct BrokenProfiles;

#[async_trait]
impl ProfileStore for BrokenProfiles {
    async fn create(&self, _profile: Profile) -> AppResult<Profile> {
        Err(AppError::DatabaseError("userinfos unavailable".to_string()))
    }

    async fn delete(&self, _id: &ObjectId) -> AppResult<bool> {
        Ok(false)
    }
}

#[actix_web::test]
async fn test_signup_failure_after_user_write_is_rolled_back() {
    let ctx = TestContext::with_profiles(Arc::new(BrokenProfiles));

    let err = ctx.auth
        .signup(signup_request("a@x.com", "alice", "p1", "p1"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::DatabaseError(_)));
    assert_eq!(ctx.store.user_count(), 0);
    assert_eq!(ctx.store.refresh_token_count(), 0);

    // 되돌린 뒤 같은 이메일로 다시 가입할 수 있어야 함
    assert!(ctx.store.find_by_email("a@x.com").await.unwrap().is_none());
}

struct BrokenLedger;

#[async_trait]
impl RefreshTokenStore for BrokenLedger {
    async fn find_by_user_id(&self, _user_id: &ObjectId) -> AppResult<Option<RefreshTokenRecord>> {
        Ok(None)
    }

    async fn create(&self, _record: RefreshTokenRecord) -> AppResult<bool> {
        Err(AppError::DatabaseError("refreshtokens unavailable".to_string()))
    }

    async fn delete_all_by_user_id(&self, _user_id: &ObjectId) -> AppResult<u64> {
        Ok(0)
    }
}

#[actix_web::test]
async fn test_signup_ledger_failure_removes_profile_and_user() {
    let ctx = TestContext::with_refresh_tokens(Arc::new(BrokenLedger));

    let err = ctx.auth
        .signup(signup_request("a@x.com", "alice", "p1", "p1"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::DatabaseError(_)));
    assert_eq!(ctx.store.profile_count(), 0);
    assert_eq!(ctx.store.user_count(), 0);
}
