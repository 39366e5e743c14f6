use axum::{extract::State, response::{IntoResponse, Redirect}, Form, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::api::dtos::{requests::AppointmentForm, responses::{AppointmentsView, DoctorChoice}};
use crate::api::flash::{set_flash, take_flash, FlashLevel};
use crate::domain::models::appointment::NewAppointment;
use crate::domain::services::validation::{validate_booking, ValidationError};
use crate::error::AppError;
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::info;

pub async fn list_appointments(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    let doctors = state.doctor_repo.list(None).await?;
    let appointments = state.appointment_repo.list_by_user(user.id).await?;

    Ok(Json(AppointmentsView {
        flash: take_flash(&cookies),
        doctor_choices: doctors.iter().map(DoctorChoice::from).collect(),
        appointments,
    }))
}

// No overlap check against the doctor's other appointments: two patients
// may book the same slot.
pub async fn book_appointment(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    cookies: Cookies,
    Form(form): Form<AppointmentForm>,
) -> Result<impl IntoResponse, AppError> {
    let request = validate_booking(
        form.doctor_id.as_deref(),
        form.date.as_deref(),
        form.time.as_deref(),
        form.reason.as_deref(),
    )?;

    let doctor = state.doctor_repo.find_by_id(request.doctor_id).await?
        .ok_or(ValidationError::InvalidChoice)?;

    let created = state.appointment_repo.create(&NewAppointment {
        user_id: user.id,
        doctor_id: doctor.id,
        date: request.date,
        time: request.time,
        reason: request.reason,
    }).await?;

    info!("Appointment {} booked with doctor {} on {} {}", created.id, doctor.id, created.date, created.time);

    set_flash(&cookies, FlashLevel::Success, "Appointment booked!");
    Ok(Redirect::to("/appointments"))
}
