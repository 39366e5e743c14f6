use crate::domain::{models::record::{MedicalRecord, NewMedicalRecord}, ports::MedicalRecordRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteMedicalRecordRepo { pool: SqlitePool }
impl SqliteMedicalRecordRepo { pub fn new(pool: SqlitePool) -> Self { Self { pool } } }

#[async_trait]
impl MedicalRecordRepository for SqliteMedicalRecordRepo {
    async fn create(&self, record: &NewMedicalRecord) -> Result<MedicalRecord, AppError> {
        sqlx::query_as::<_, MedicalRecord>(
            "INSERT INTO medical_records (user_id, title, notes, created_at) VALUES (?, ?, ?, ?) RETURNING *"
        )
            .bind(record.user_id)
            .bind(&record.title)
            .bind(&record.notes)
            .bind(record.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<MedicalRecord>, AppError> {
        sqlx::query_as::<_, MedicalRecord>(
            "SELECT * FROM medical_records WHERE user_id = ? ORDER BY created_at DESC, id DESC"
        )
            .bind(user_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn count_by_user(&self, user_id: i64) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM medical_records WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
}
