//! 인증 오케스트레이터 구현
//!
//! 회원가입, 로그인, 토큰 갱신, 로그아웃 흐름을 조율합니다.
//! 저장소와 토큰/비밀번호 서비스는 모두 생성자로 주입됩니다.
//!
//! ## 회원가입 쓰기 순서
//!
//! ```text
//! users.create (refresh_token 포함)
//!   → userinfos.create (빈 프로필)
//!   → users.update (info 연결)
//!   → refreshtokens.create (기록이 없을 때만)
//! ```
//!
//! 사용자 문서가 저장된 뒤 단계가 실패하면 이미 저장된 프로필과 사용자를
//! 삭제하여 반쯤 만들어진 계정이 남지 않게 합니다.

use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use crate::{
    domain::{
        dto::{AuthResponse, RefreshTokenRequest, RefreshTokenResponse, SignInRequest, SignUpRequest},
        entities::{Profile, RefreshTokenRecord, User, UserChanges},
        models::token::{TokenKind, TokenPair},
    },
    errors::{AppError, AppResult},
    repositories::{
        tokens::RefreshTokenStore,
        users::{ProfileStore, UserStore},
    },
    services::auth::{PasswordService, TokenService},
    utils::string_utils::{normalize_email, validate_required_string},
};

/// 인증 서비스
///
/// 요청마다 공유 참조로 호출되며 내부 가변 상태가 없습니다.
/// 동시성 제어는 저장소의 유니크 인덱스에 맡깁니다.
pub struct AuthService {
    users: Arc<dyn UserStore>,
    profiles: Arc<dyn ProfileStore>,
    refresh_tokens: Arc<dyn RefreshTokenStore>,
    token_service: TokenService,
    password_service: PasswordService,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserStore>,
        profiles: Arc<dyn ProfileStore>,
        refresh_tokens: Arc<dyn RefreshTokenStore>,
        token_service: TokenService,
        password_service: PasswordService,
    ) -> Self {
        Self {
            users,
            profiles,
            refresh_tokens,
            token_service,
            password_service,
        }
    }

    /// 회원가입
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 확인 비밀번호 불일치 (어떤 읽기/쓰기보다 먼저 검사)
    /// * `AppError::ConflictError` - 이메일 또는 이름 중복
    /// * `AppError::DatabaseError` - 저장소 오류
    pub async fn signup(&self, request: SignUpRequest) -> AppResult<AuthResponse> {
        if request.password != request.confirmpassword {
            return Err(AppError::ValidationError("Confirmpassword is not match".to_string()));
        }

        let email = normalize_email(&request.email);
        let name = validate_required_string(&request.name, "name")?;

        if self.users.find_by_email(&email).await?.is_some() {
            log::warn!("회원가입 거부 - 이메일 중복: {}", email);
            return Err(AppError::ConflictError("This email already exists".to_string()));
        }

        if self.users.find_by_name(&name).await?.is_some() {
            log::warn!("회원가입 거부 - 이름 중복: {}", name);
            return Err(AppError::ConflictError("This name already exists".to_string()));
        }

        let password_hash = self.password_service.hash(&request.password).await?;

        let user_id = ObjectId::new();
        let subject = user_id.to_hex();
        let config = self.token_service.config();
        let token = TokenPair {
            access_token: self.token_service.issue(&subject, TokenKind::Access, config.signup_access_ttl)?,
            refresh_token: self.token_service.issue(&subject, TokenKind::Refresh, config.refresh_ttl)?,
        };

        let mut user = User::new_local(user_id, email, name, password_hash);
        user.refresh_token = Some(token.refresh_token.clone());
        self.users.create(user).await?;

        let user = match self.complete_signup(user_id, &token.refresh_token).await {
            Ok(user) => user,
            Err((e, profile_id)) => {
                self.compensate_signup(user_id, profile_id).await;
                return Err(e);
            }
        };

        log::info!("✅ 회원가입 완료 - user_id: {}", subject);

        Ok(AuthResponse::new(token, user))
    }

    /// 사용자 문서 저장 이후 단계. 실패 시 이미 만든 프로필 ID를 함께 돌려줍니다.
    async fn complete_signup(
        &self,
        user_id: ObjectId,
        refresh_token: &str,
    ) -> Result<User, (AppError, Option<ObjectId>)> {
        let profile = self.profiles
            .create(Profile::empty_for(user_id))
            .await
            .map_err(|e| (e, None))?;
        let profile_id = profile.id
            .ok_or_else(|| (AppError::InternalError("프로필 ID가 없습니다".to_string()), None))?;

        let user = self.users
            .update(&user_id, UserChanges::link_profile(profile_id))
            .await
            .map_err(|e| (e, Some(profile_id)))?
            .ok_or_else(|| {
                (AppError::DatabaseError(format!("User {} disappeared during signup", user_id)), Some(profile_id))
            })?;

        self.record_refresh_token(user_id, refresh_token)
            .await
            .map_err(|e| (e, Some(profile_id)))?;

        Ok(user)
    }

    async fn compensate_signup(&self, user_id: ObjectId, profile_id: Option<ObjectId>) {
        if let Some(profile_id) = profile_id {
            if let Err(e) = self.profiles.delete(&profile_id).await {
                log::error!("회원가입 보상 삭제 실패 (profile {}): {}", profile_id, e);
            }
        }

        if let Err(e) = self.users.delete(&user_id).await {
            log::error!("회원가입 보상 삭제 실패 (user {}): {}", user_id, e);
        }

        log::warn!("회원가입 중단 - 저장된 문서를 되돌렸습니다: {}", user_id);
    }

    /// 사용자당 하나의 리프레시 토큰 기록을 유지합니다.
    ///
    /// 이미 기록이 있으면 새로 만들지 않습니다. 동시 요청으로 저장소가
    /// `false`를 돌려주는 경우도 정상으로 취급합니다.
    async fn record_refresh_token(&self, user_id: ObjectId, token: &str) -> AppResult<()> {
        if self.refresh_tokens.find_by_user_id(&user_id).await?.is_none() {
            let created = self.refresh_tokens
                .create(RefreshTokenRecord::new(user_id, token))
                .await?;

            if !created {
                log::debug!("리프레시 토큰 기록이 동시에 생성됨 - user_id: {}", user_id);
            }
        }

        Ok(())
    }

    /// 로그인
    ///
    /// 비밀번호 검증을 활성화 여부보다 먼저 수행합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 등록되지 않은 이메일
    /// * `AppError::ConflictError` - 비밀번호 불일치 또는 비활성 계정
    pub async fn signin(&self, request: SignInRequest) -> AppResult<AuthResponse> {
        let email = normalize_email(&request.email);

        let user = self.users
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::NotFound("This email was not found".to_string()))?;

        if !self.password_service.verify(&request.password, &user.password).await? {
            log::warn!("로그인 거부 - 비밀번호 불일치: {}", email);
            return Err(AppError::ConflictError("Password not matching".to_string()));
        }

        if !user.is_active {
            log::warn!("로그인 거부 - 비활성 계정: {}", email);
            return Err(AppError::ConflictError("This user was disabled".to_string()));
        }

        let user_id = user.id
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;
        let subject = user_id.to_hex();
        let config = self.token_service.config();
        let token = TokenPair {
            access_token: self.token_service.issue(&subject, TokenKind::Access, config.access_ttl)?,
            refresh_token: self.token_service.issue(&subject, TokenKind::Refresh, config.refresh_ttl)?,
        };

        let user = self.users
            .update(&user_id, UserChanges::refresh_token(token.refresh_token.clone()))
            .await?
            .unwrap_or(user);

        self.record_refresh_token(user_id, &token.refresh_token).await?;

        log::info!("🔑 로그인 성공 - user_id: {}", subject);

        Ok(AuthResponse::new(token, user))
    }

    /// 리프레시 토큰으로 새 액세스 토큰 발급
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 서명 불일치, 만료, 형식 오류
    /// * `AppError::AuthorizationError` - 리프레시 토큰이 아님
    /// * `AppError::ConflictError` - 주체 사용자가 없거나 비활성
    pub async fn refresh_token(&self, request: RefreshTokenRequest) -> AppResult<RefreshTokenResponse> {
        let claims = self.token_service.verify(&request.refresh_token, TokenKind::Refresh)?;

        let user = match ObjectId::parse_str(&claims.id) {
            Ok(id) => self.users.find_by_id(&id).await?,
            Err(_) => None,
        }
        .ok_or_else(|| AppError::ConflictError(format!("This user {} was not found", claims.id)))?;

        if !user.is_active {
            log::warn!("토큰 갱신 거부 - 비활성 계정: {}", claims.id);
            return Err(AppError::ConflictError(format!("This user {} was not active", claims.id)));
        }

        let token = self.token_service.issue(
            &claims.id,
            TokenKind::Access,
            self.token_service.config().access_ttl,
        )?;

        log::info!("🔄 액세스 토큰 재발급 - user_id: {}", claims.id);

        Ok(RefreshTokenResponse { token })
    }

    /// 로그아웃
    ///
    /// 사용자의 리프레시 토큰 기록을 모두 삭제합니다. 기록이 없어도 성공합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::BadRequest` - ObjectId 형식이 아닌 사용자 ID
    pub async fn signout(&self, user_id: &str) -> AppResult<String> {
        let id = ObjectId::parse_str(user_id)
            .map_err(|_| AppError::BadRequest(format!("User id {} is not valid", user_id)))?;

        let removed = self.refresh_tokens.delete_all_by_user_id(&id).await?;

        log::info!("👋 로그아웃 - user_id: {}, 삭제된 기록: {}", user_id, removed);

        Ok(format!("Logged out user id {}", user_id))
    }
}
