use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::error::AppError;
use std::sync::Arc;

pub async fn list_services(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let services = state.service_repo.list().await?;
    Ok(Json(services))
}

pub async fn list_records(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let records = state.record_repo.list_by_user(user.id).await?;
    Ok(Json(records))
}

pub async fn list_prescriptions(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let prescriptions = state.prescription_repo.list_by_user(user.id).await?;
    Ok(Json(prescriptions))
}

pub async fn list_invoices(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let invoices = state.invoice_repo.list_by_user(user.id).await?;
    Ok(Json(invoices))
}
