use axum::extract::Extension;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::common::{ApiError, Identity};
use crate::domains::auth::actions::{self, LoginInput, RegisterInput};
use crate::domains::auth::session::{clear_session_cookie, session_cookie};
use crate::server::app::AppState;

/// POST /api/auth/register
pub async fn register_handler(
    Extension(state): Extension<AppState>,
    Json(input): Json<RegisterInput>,
) -> Result<impl IntoResponse, ApiError> {
    let user = actions::register(input, &state.db_pool).await?;

    Ok((StatusCode::CREATED, Json(json!({ "user": user }))))
}

/// POST /api/auth/login
///
/// On success the session token travels twice: in the body for bearer-style
/// API callers, and as the HTTP-only session cookie for browsers.
pub async fn login_handler(
    Extension(state): Extension<AppState>,
    Json(input): Json<LoginInput>,
) -> Result<Response, ApiError> {
    let outcome = actions::login(input, &state.sessions, &state.db_pool).await?;

    let cookie = session_cookie(&outcome.token, state.secure_cookies);
    let mut response = Json(json!({
        "user": outcome.user,
        "token": outcome.token,
    }))
    .into_response();
    response
        .headers_mut()
        .insert(SET_COOKIE, HeaderValue::from_str(&cookie).map_err(anyhow::Error::new)?);

    Ok(response)
}

/// POST /api/auth/logout
///
/// Stateless sessions: logging out just expires the cookie.
pub async fn logout_handler(
    Extension(state): Extension<AppState>,
) -> Result<Response, ApiError> {
    let cookie = clear_session_cookie(state.secure_cookies);
    let mut response = Json(json!({ "success": true })).into_response();
    response
        .headers_mut()
        .insert(SET_COOKIE, HeaderValue::from_str(&cookie).map_err(anyhow::Error::new)?);

    Ok(response)
}

/// GET /api/auth/me
pub async fn me_handler(
    Extension(state): Extension<AppState>,
    identity: Identity,
) -> Result<impl IntoResponse, ApiError> {
    let user = actions::current_user(&identity, &state.db_pool).await?;

    Ok(Json(json!({ "user": user })))
}
