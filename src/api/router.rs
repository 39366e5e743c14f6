use axum::{
    body::Body,
    extract::Request,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, auth, dashboard, doctor, appointment, listing};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tower_cookies::CookieManagerLayer;
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth (public)
        .route("/", get(auth::login_page).post(auth::login))
        .route("/register", post(auth::register))
        .route("/logout", get(auth::logout))

        // Portal
        .route("/dashboard", get(dashboard::dashboard))
        .route("/doctors", get(doctor::search_doctors))
        .route("/appointments", get(appointment::list_appointments).post(appointment::book_appointment))

        // Listings
        .route("/services", get(listing::list_services))
        .route("/records", get(listing::list_records))
        .route("/prescriptions", get(listing::list_prescriptions))
        .route("/billing", get(listing::list_invoices))

        // JSON API
        .route("/api/doctors", get(doctor::api_doctors))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
