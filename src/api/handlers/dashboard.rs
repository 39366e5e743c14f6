use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::api::dtos::responses::DashboardView;
use crate::error::AppError;
use std::sync::Arc;

pub const DASHBOARD_DOCTOR_LIMIT: i64 = 6;

pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let doctors = state.doctor_repo.list(Some(DASHBOARD_DOCTOR_LIMIT)).await?;
    let next_appointment = state.appointment_repo.find_first_for_user(user.id).await?;

    Ok(Json(DashboardView {
        user: user.into(),
        doctors,
        next_appointment,
    }))
}
