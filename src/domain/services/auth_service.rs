use std::sync::Arc;
use crate::domain::{
    models::{session::SessionRecord, user::{NewUser, User}},
    ports::{SessionRepository, UserRepository},
    services::{password::{hash_password, verify_password}, validation::{validate_password, Credentials, Registration}},
};
use crate::error::AppError;
use chrono::{Duration, Utc};
use rand::{distributions::Alphanumeric, Rng};
use sha2::{Sha256, Digest};
use tracing::{info, warn};

pub const SESSION_TOKEN_LEN: usize = 64;
/// Session lifetime bounds in hours (one hour to one year).
pub const MIN_SESSION_TTL_HOURS: i64 = 1;
pub const MAX_SESSION_TTL_HOURS: i64 = 24 * 365;

/// Converts a configured lifetime to a `Duration`, clamped so expiry arithmetic cannot overflow.
pub fn session_ttl_from_hours(hours: i64) -> Duration {
    let clamped = hours.clamp(MIN_SESSION_TTL_HOURS, MAX_SESSION_TTL_HOURS);
    if clamped != hours {
        warn!("Session TTL of {}h is out of range, using {}h", hours, clamped);
    }
    Duration::hours(clamped)
}

pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    session_repo: Arc<dyn SessionRepository>,
    session_ttl: Duration,
}

impl AuthService {
    pub fn new(user_repo: Arc<dyn UserRepository>, session_repo: Arc<dyn SessionRepository>, session_ttl_hours: i64) -> Self {
        Self {
            user_repo,
            session_repo,
            session_ttl: session_ttl_from_hours(session_ttl_hours),
        }
    }

    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }

    pub async fn register(&self, registration: Registration) -> Result<User, AppError> {
        if self.user_repo.find_by_email(&registration.email).await?.is_some() {
            return Err(AppError::Conflict("Email already registered".into()));
        }

        let password_hash = hash_password(&registration.password)?;
        let user = self.user_repo
            .create(&NewUser::new(registration.full_name, registration.email, password_hash))
            .await?;

        info!("Registered user: {}", user.id);
        Ok(user)
    }

    /// Verifies credentials and opens a session. Returns the user and the raw cookie token.
    pub async fn login(&self, credentials: &Credentials) -> Result<(User, String), AppError> {
        let user = self.user_repo.find_by_email(&credentials.email).await?
            .ok_or(AppError::InvalidCredentials)?;

        if !verify_password(&user.password_hash, &credentials.password) {
            warn!("Failed login attempt for user {}", user.id);
            return Err(AppError::InvalidCredentials);
        }

        let raw_token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(SESSION_TOKEN_LEN)
            .map(char::from)
            .collect();

        let now = Utc::now();
        let record = SessionRecord {
            token_hash: self.hash_token(&raw_token),
            user_id: user.id,
            expires_at: now + self.session_ttl,
            created_at: now,
        };
        self.session_repo.create(&record).await?;

        Ok((user, raw_token))
    }

    pub async fn logout(&self, raw_token: &str) -> Result<(), AppError> {
        self.session_repo.delete(&self.hash_token(raw_token)).await
    }

    /// Resolves a session token to its user. Expired sessions are removed.
    pub async fn authenticate(&self, raw_token: &str) -> Result<Option<User>, AppError> {
        let token_hash = self.hash_token(raw_token);
        let Some(session) = self.session_repo.find(&token_hash).await? else {
            return Ok(None);
        };

        if session.is_expired() {
            self.session_repo.delete(&token_hash).await?;
            return Ok(None);
        }

        self.user_repo.find_by_id(session.user_id).await
    }

    /// Replaces the stored credential and drops every open session of the user.
    pub async fn set_password(&self, user_id: i64, password: &str) -> Result<(), AppError> {
        validate_password(password)?;

        self.user_repo.find_by_id(user_id).await?
            .ok_or(AppError::NotFound("User not found".into()))?;

        let password_hash = hash_password(password)?;
        self.user_repo.update_password(user_id, &password_hash).await?;
        self.session_repo.delete_for_user(user_id).await?;

        info!("Password changed for user: {}", user_id);
        Ok(())
    }

    pub fn hash_token(&self, token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        hex::encode(hasher.finalize())
    }
}
