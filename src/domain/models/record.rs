use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct MedicalRecord {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewMedicalRecord {
    pub user_id: i64,
    pub title: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

impl NewMedicalRecord {
    pub fn new(user_id: i64, title: &str, notes: &str) -> Self {
        Self {
            user_id,
            title: title.to_string(),
            notes: notes.to_string(),
            created_at: Utc::now(),
        }
    }
}
