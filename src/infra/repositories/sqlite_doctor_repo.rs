use crate::domain::{models::doctor::{Doctor, DoctorFilter, NewDoctor}, ports::DoctorRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteDoctorRepo {
    pool: SqlitePool,
}

impl SqliteDoctorRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DoctorRepository for SqliteDoctorRepo {
    async fn create(&self, doctor: &NewDoctor) -> Result<Doctor, AppError> {
        sqlx::query_as::<_, Doctor>(
            r#"INSERT INTO doctors (name, specialization, hospital, contact, work_hours, bio, photo, rating)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?)
               RETURNING *"#
        )
            .bind(&doctor.name)
            .bind(&doctor.specialization)
            .bind(&doctor.hospital)
            .bind(&doctor.contact)
            .bind(&doctor.work_hours)
            .bind(&doctor.bio)
            .bind(&doctor.photo)
            .bind(doctor.rating)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Doctor>, AppError> {
        sqlx::query_as::<_, Doctor>("SELECT * FROM doctors WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Doctor>, AppError> {
        sqlx::query_as::<_, Doctor>("SELECT * FROM doctors WHERE name = ? ORDER BY id ASC LIMIT 1")
            .bind(name)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self, limit: Option<i64>) -> Result<Vec<Doctor>, AppError> {
        // LIMIT -1 means no limit in SQLite.
        sqlx::query_as::<_, Doctor>("SELECT * FROM doctors ORDER BY id ASC LIMIT ?")
            .bind(limit.unwrap_or(-1))
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn search(&self, filter: &DoctorFilter) -> Result<Vec<Doctor>, AppError> {
        let pattern = filter.like_pattern();
        sqlx::query_as::<_, Doctor>(
            r#"SELECT * FROM doctors
               WHERE (? IS NULL OR lower(name) LIKE ? OR lower(hospital) LIKE ?)
                 AND (? IS NULL OR specialization = ?)
               ORDER BY id ASC"#
        )
            .bind(&pattern)
            .bind(&pattern)
            .bind(&pattern)
            .bind(&filter.specialization)
            .bind(&filter.specialization)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_specializations(&self) -> Result<Vec<String>, AppError> {
        sqlx::query_scalar::<_, String>("SELECT DISTINCT specialization FROM doctors ORDER BY specialization ASC")
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn count(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM doctors")
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
}
