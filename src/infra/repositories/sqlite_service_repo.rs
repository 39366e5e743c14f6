use crate::domain::{models::service::{NewService, Service}, ports::ServiceRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteServiceRepo { pool: SqlitePool }
impl SqliteServiceRepo { pub fn new(pool: SqlitePool) -> Self { Self { pool } } }

#[async_trait]
impl ServiceRepository for SqliteServiceRepo {
    async fn create(&self, service: &NewService) -> Result<Service, AppError> {
        sqlx::query_as::<_, Service>(
            "INSERT INTO services (name, description, price) VALUES (?, ?, ?) RETURNING *"
        )
            .bind(&service.name)
            .bind(&service.description)
            .bind(service.price)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Service>, AppError> {
        sqlx::query_as::<_, Service>("SELECT * FROM services ORDER BY id ASC")
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn count(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM services")
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
}
