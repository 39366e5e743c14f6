use crate::domain::{models::prescription::{NewPrescription, Prescription}, ports::PrescriptionRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqlitePrescriptionRepo { pool: SqlitePool }
impl SqlitePrescriptionRepo { pub fn new(pool: SqlitePool) -> Self { Self { pool } } }

#[async_trait]
impl PrescriptionRepository for SqlitePrescriptionRepo {
    async fn create(&self, prescription: &NewPrescription) -> Result<Prescription, AppError> {
        sqlx::query_as::<_, Prescription>(
            r#"INSERT INTO prescriptions (user_id, doctor_name, medication, dosage, instructions, issued_on)
               VALUES (?, ?, ?, ?, ?, ?)
               RETURNING *"#
        )
            .bind(prescription.user_id)
            .bind(&prescription.doctor_name)
            .bind(&prescription.medication)
            .bind(&prescription.dosage)
            .bind(&prescription.instructions)
            .bind(prescription.issued_on)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Prescription>, AppError> {
        sqlx::query_as::<_, Prescription>(
            "SELECT * FROM prescriptions WHERE user_id = ? ORDER BY issued_on DESC, id DESC"
        )
            .bind(user_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
