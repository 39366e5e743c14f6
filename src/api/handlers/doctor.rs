use axum::{extract::{State, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::api::dtos::{requests::DoctorSearchQuery, responses::DoctorDirectoryView};
use crate::domain::models::doctor::DoctorFilter;
use crate::error::AppError;
use std::sync::Arc;
use tracing::debug;

pub async fn search_doctors(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Query(params): Query<DoctorSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = DoctorFilter::new(params.q.as_deref(), params.spec.as_deref());

    let doctors = state.doctor_repo.search(&filter).await?;
    let specializations = state.doctor_repo.list_specializations().await?;

    debug!(query = ?filter.query, spec = ?filter.specialization, hits = doctors.len(), "doctor search");

    Ok(Json(DoctorDirectoryView {
        doctors,
        specializations,
        q: filter.query.unwrap_or_default(),
        spec: filter.specialization.unwrap_or_default(),
    }))
}

pub async fn api_doctors(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let doctors = state.doctor_repo.list(None).await?;
    Ok(Json(doctors))
}
