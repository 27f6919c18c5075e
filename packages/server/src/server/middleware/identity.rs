use std::sync::Arc;

use axum::async_trait;
use axum::extract::{FromRequestParts, Request};
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use crate::common::{ApiError, Identity};
use crate::domains::auth::{SessionService, SESSION_COOKIE};

/// Identity middleware
///
/// Resolves the session token (Authorization header or `token` cookie) to an
/// `Identity` and stores it in request extensions. Does NOT block requests -
/// anonymous requests continue without an `Identity`, and each route decides
/// what that means.
pub async fn identity_middleware(
    sessions: Arc<SessionService>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(identity) = extract_identity(&request, &sessions) {
        debug!(user_id = %identity.user_id, "authenticated request");
        request.extensions_mut().insert(identity);
    } else {
        debug!("no valid session token");
    }

    next.run(request).await
}

/// Extract and verify the session token from a request.
///
/// The Authorization header wins when both carriers are present.
fn extract_identity(request: &Request, sessions: &SessionService) -> Option<Identity> {
    let token = bearer_token(request).or_else(|| cookie_token(request))?;
    sessions.read(&token).ok()
}

fn bearer_token(request: &Request) -> Option<String> {
    let auth_header = request.headers().get("authorization")?;
    let auth_str = auth_header.to_str().ok()?;

    // Handle both "Bearer <token>" and raw token
    Some(auth_str.strip_prefix("Bearer ").unwrap_or(auth_str).to_string())
}

fn cookie_token(request: &Request) -> Option<String> {
    let cookie_header = request.headers().get(COOKIE)?;
    let cookies = cookie_header.to_str().ok()?;

    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

/// Extractor for routes that require an authenticated caller: rejects with
/// 401 when the identity middleware found no valid session.
#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .copied()
            .ok_or(ApiError::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use crate::common::UserId;

    fn sessions() -> SessionService {
        SessionService::new("test_secret", "test_issuer".to_string())
    }

    fn request_with_header(name: &str, value: String) -> Request {
        axum::http::Request::builder()
            .header(name, value)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn bearer_header_resolves() {
        let sessions = sessions();
        let user_id = UserId::new();
        let token = sessions.issue(user_id).unwrap();

        let request = request_with_header("authorization", format!("Bearer {}", token));
        let identity = extract_identity(&request, &sessions);

        assert_eq!(identity.unwrap().user_id, user_id);
    }

    #[test]
    fn raw_authorization_header_resolves() {
        let sessions = sessions();
        let user_id = UserId::new();
        let token = sessions.issue(user_id).unwrap();

        let request = request_with_header("authorization", token);
        assert!(extract_identity(&request, &sessions).is_some());
    }

    #[test]
    fn cookie_resolves() {
        let sessions = sessions();
        let user_id = UserId::new();
        let token = sessions.issue(user_id).unwrap();

        let request =
            request_with_header("cookie", format!("theme=dark; token={}; lang=en", token));
        let identity = extract_identity(&request, &sessions);

        assert_eq!(identity.unwrap().user_id, user_id);
    }

    #[test]
    fn no_credentials_is_anonymous() {
        let sessions = sessions();
        let request = axum::http::Request::builder().body(Body::empty()).unwrap();

        assert!(extract_identity(&request, &sessions).is_none());
    }

    #[test]
    fn invalid_token_is_anonymous() {
        let sessions = sessions();
        let request = request_with_header("authorization", "Bearer garbage".to_string());

        assert!(extract_identity(&request, &sessions).is_none());
    }
}
