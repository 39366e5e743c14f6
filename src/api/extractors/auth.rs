use axum::{
    extract::{FromRequestParts, FromRef},
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use crate::state::AppState;
use crate::domain::models::user::User;
use crate::error::AppError;
use std::sync::Arc;
use tower_cookies::{Cookie, Cookies};
use tracing::{debug, Span};

pub const SESSION_COOKIE: &str = "session_id";

/// The authenticated user behind the request's session cookie.
/// Requests without a live session are redirected to the login page.
pub struct AuthUser(pub User);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let cookies = parts.extensions.get::<Cookies>()
            .cloned()
            .ok_or_else(|| AppError::InternalWithMsg("CookieManagerLayer missing".into()).into_response())?;

        let Some(token) = cookies.get(SESSION_COOKIE).map(|c| c.value().to_string()) else {
            return Err(Redirect::to("/").into_response());
        };

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let user = app_state.auth_service.authenticate(&token).await
            .map_err(IntoResponse::into_response)?;

        match user {
            Some(user) => {
                Span::current().record("user_id", user.id);
                Ok(AuthUser(user))
            }
            None => {
                debug!("Stale session cookie, redirecting to login");
                cookies.remove(Cookie::build((SESSION_COOKIE, "")).path("/").into());
                Err(Redirect::to("/").into_response())
            }
        }
    }
}
