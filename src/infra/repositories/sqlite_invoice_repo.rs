use crate::domain::{models::invoice::{Invoice, NewInvoice}, ports::InvoiceRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteInvoiceRepo { pool: SqlitePool }
impl SqliteInvoiceRepo { pub fn new(pool: SqlitePool) -> Self { Self { pool } } }

#[async_trait]
impl InvoiceRepository for SqliteInvoiceRepo {
    async fn create(&self, invoice: &NewInvoice) -> Result<Invoice, AppError> {
        sqlx::query_as::<_, Invoice>(
            "INSERT INTO invoices (user_id, item, amount, status, issued_on) VALUES (?, ?, ?, ?, ?) RETURNING *"
        )
            .bind(invoice.user_id)
            .bind(&invoice.item)
            .bind(invoice.amount)
            .bind(invoice.status)
            .bind(invoice.issued_on)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Invoice>, AppError> {
        sqlx::query_as::<_, Invoice>(
            "SELECT * FROM invoices WHERE user_id = ? ORDER BY issued_on DESC, id DESC"
        )
            .bind(user_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
