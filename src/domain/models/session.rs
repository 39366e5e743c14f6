use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Server-side login session. Only the SHA-256 digest of the cookie token is stored.
#[derive(Debug, FromRow, Clone)]
pub struct SessionRecord {
    pub token_hash: String,
    pub user_id: i64,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}
