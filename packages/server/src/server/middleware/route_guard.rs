use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use crate::common::Identity;

/// Page the route guard sends anonymous visitors to.
const LOGIN_PAGE: &str = "/auth/login";

/// Page the route guard sends signed-in visitors to when they hit an
/// auth-only page.
const DASHBOARD_PAGE: &str = "/dashboard";

/// Whether a path needs an authenticated session to view.
///
/// The public set: the landing page, the auth flow, the marketing
/// subscription page, the demo page, static assets and the health endpoint,
/// and everything under `/api` - API authorization is enforced per-route,
/// not by this classifier.
pub fn requires_auth(path: &str) -> bool {
    let public = path == "/"
        || path == "/auth"
        || path.starts_with("/auth/")
        || path == "/subscription"
        || path == "/try-luna"
        || path.starts_with("/static/")
        || path.starts_with("/assets/")
        || path == "/favicon.ico"
        || path == "/health"
        || path == "/api"
        || path.starts_with("/api/");

    !public
}

/// Whether an authenticated visitor should be bounced off this path.
pub fn redirect_authenticated_away_from(path: &str) -> bool {
    matches!(path, "/auth/login" | "/auth/register")
}

/// Route guard middleware - runs once per inbound request, after identity
/// resolution and before any resource logic.
///
/// Anonymous on a protected page: redirect to login. Authenticated on an
/// auth-only page: redirect to the dashboard. Everything else passes
/// through unchanged.
pub async fn page_route_guard(request: Request, next: Next) -> Response {
    let path = request.uri().path();
    let authenticated = request.extensions().get::<Identity>().is_some();

    if !authenticated && requires_auth(path) {
        return Redirect::to(LOGIN_PAGE).into_response();
    }

    if authenticated && redirect_authenticated_away_from(path) {
        return Redirect::to(DASHBOARD_PAGE).into_response();
    }

    next.run(request).await
}
