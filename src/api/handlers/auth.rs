use axum::{extract::State, response::{IntoResponse, Redirect}, Form, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::{requests::{LoginForm, RegisterForm}, responses::LoginPage};
use crate::api::extractors::auth::{AuthUser, SESSION_COOKIE};
use crate::api::flash::{set_flash, take_flash, FlashLevel};
use crate::domain::services::validation::{validate_login, validate_registration};
use std::sync::Arc;
use tower_cookies::{Cookies, Cookie};
use tower_cookies::cookie::SameSite;
use time::Duration;
use tracing::{info, warn};

pub async fn login_page(cookies: Cookies) -> impl IntoResponse {
    Json(LoginPage {
        flash: take_flash(&cookies),
    })
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse, AppError> {
    let credentials = validate_login(form.email.as_deref(), form.password.as_deref())?;

    let (user, token) = state.auth_service.login(&credentials).await?;

    let ttl_seconds = state.auth_service.session_ttl().num_seconds();
    set_session_cookie(&cookies, &token, Duration::seconds(ttl_seconds), state.config.cookie_secure);

    info!("User logged in: {}", user.id);

    Ok(Redirect::to("/dashboard"))
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Form(form): Form<RegisterForm>,
) -> Result<impl IntoResponse, AppError> {
    let registration = match validate_registration(
        form.full_name.as_deref(),
        form.email.as_deref(),
        form.password.as_deref(),
        form.confirm.as_deref(),
    ) {
        Ok(registration) => registration,
        Err(e) => {
            set_flash(&cookies, FlashLevel::Danger, format!("Please correct the errors and try again. {}", e));
            return Ok(Redirect::to("/"));
        }
    };

    match state.auth_service.register(registration).await {
        Ok(_) => set_flash(&cookies, FlashLevel::Success, "Account created! Please log in."),
        Err(AppError::Conflict(msg)) => {
            warn!("Registration rejected: {}", msg);
            set_flash(&cookies, FlashLevel::Warning, msg);
        }
        Err(e) => return Err(e),
    }

    Ok(Redirect::to("/"))
}

pub async fn logout(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    if let Some(cookie) = cookies.get(SESSION_COOKIE) {
        state.auth_service.logout(cookie.value()).await?;
    }

    cookies.remove(Cookie::build((SESSION_COOKIE, "")).path("/").into());

    info!("User logged out: {}", user.id);

    Ok(Redirect::to("/"))
}

fn set_session_cookie(cookies: &Cookies, token: &str, max_age: Duration, secure: bool) {
    let mut session_c = Cookie::new(SESSION_COOKIE, token.to_string());
    session_c.set_http_only(true);
    session_c.set_secure(secure);
    session_c.set_same_site(SameSite::Lax);
    session_c.set_path("/");
    session_c.set_max_age(max_age);
    cookies.add(session_c);
}
