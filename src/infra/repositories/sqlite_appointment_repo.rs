use crate::domain::{
    models::appointment::{Appointment, AppointmentDetails, NewAppointment},
    ports::AppointmentRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

const DETAILS_SELECT: &str = r#"SELECT a.id, a.doctor_id, d.name AS doctor_name, d.specialization, d.hospital, a.date, a.time, a.reason
    FROM appointments a
    JOIN doctors d ON d.id = a.doctor_id
    WHERE a.user_id = ?"#;

pub struct SqliteAppointmentRepo {
    pool: SqlitePool,
}

impl SqliteAppointmentRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentRepository for SqliteAppointmentRepo {
    async fn create(&self, appointment: &NewAppointment) -> Result<Appointment, AppError> {
        sqlx::query_as::<_, Appointment>(
            "INSERT INTO appointments (user_id, doctor_id, date, time, reason) VALUES (?, ?, ?, ?, ?) RETURNING *"
        )
            .bind(appointment.user_id)
            .bind(appointment.doctor_id)
            .bind(appointment.date)
            .bind(appointment.time)
            .bind(&appointment.reason)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<AppointmentDetails>, AppError> {
        sqlx::query_as::<_, AppointmentDetails>(&format!("{DETAILS_SELECT} ORDER BY a.date DESC, a.time DESC, a.id DESC"))
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_first_for_user(&self, user_id: i64) -> Result<Option<AppointmentDetails>, AppError> {
        sqlx::query_as::<_, AppointmentDetails>(&format!("{DETAILS_SELECT} ORDER BY a.date ASC, a.time ASC, a.id ASC LIMIT 1"))
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
