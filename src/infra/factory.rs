use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::services::auth_service::AuthService;
use crate::error::AppError;
use crate::infra::repositories::{
    sqlite_user_repo::SqliteUserRepo, sqlite_session_repo::SqliteSessionRepo,
    sqlite_doctor_repo::SqliteDoctorRepo, sqlite_appointment_repo::SqliteAppointmentRepo,
    sqlite_service_repo::SqliteServiceRepo, sqlite_record_repo::SqliteMedicalRecordRepo,
    sqlite_prescription_repo::SqlitePrescriptionRepo, sqlite_invoice_repo::SqliteInvoiceRepo,
};

pub async fn connect_pool(database_url: &str) -> Result<SqlitePool, AppError> {
    info!("Initializing SQLite connection with WAL Mode...");

    let opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await?;

    run_sqlite_migrations(&pool).await?;
    Ok(pool)
}

pub fn build_state(config: &Config, pool: SqlitePool) -> AppState {
    let user_repo = Arc::new(SqliteUserRepo::new(pool.clone()));
    let session_repo = Arc::new(SqliteSessionRepo::new(pool.clone()));
    let auth_service = Arc::new(AuthService::new(user_repo.clone(), session_repo, config.session_ttl_hours));

    AppState {
        config: config.clone(),
        user_repo,
        doctor_repo: Arc::new(SqliteDoctorRepo::new(pool.clone())),
        appointment_repo: Arc::new(SqliteAppointmentRepo::new(pool.clone())),
        service_repo: Arc::new(SqliteServiceRepo::new(pool.clone())),
        record_repo: Arc::new(SqliteMedicalRecordRepo::new(pool.clone())),
        prescription_repo: Arc::new(SqlitePrescriptionRepo::new(pool.clone())),
        invoice_repo: Arc::new(SqliteInvoiceRepo::new(pool)),
        auth_service,
    }
}

pub async fn bootstrap_state(config: &Config) -> Result<AppState, AppError> {
    let pool = connect_pool(&config.database_url).await?;
    Ok(build_state(config, pool))
}

async fn run_sqlite_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .map_err(|e| AppError::InternalWithMsg(format!("Failed to run SQLite migrations: {e}")))
}
