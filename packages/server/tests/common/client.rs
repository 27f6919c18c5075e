//! HTTP client for integration tests.
//!
//! Drives the real application router in-process via `tower::ServiceExt`,
//! so requests cross every middleware layer exactly as in production.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use luna_core::common::UserId;
use luna_core::domains::auth::SessionService;
use luna_core::server::build_app;
use luna_core::Environment;

pub const TEST_TOKEN_SECRET: &str = "test-token-secret";
pub const TEST_TOKEN_ISSUER: &str = "luna-test";

pub struct TestClient {
    app: Router,
    sessions: Arc<SessionService>,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestClient {
    pub fn new(pool: PgPool) -> Self {
        let sessions = Arc::new(SessionService::new(
            TEST_TOKEN_SECRET,
            TEST_TOKEN_ISSUER.to_string(),
        ));
        let app = build_app(pool, sessions.clone(), Environment::Development, vec![]);

        Self { app, sessions }
    }

    /// Issue a session token the app will accept, for acting as `user_id`.
    pub fn token_for(&self, user_id: UserId) -> String {
        self.sessions
            .issue(user_id)
            .expect("failed to issue test token")
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::GET, path, token, None).await
    }

    pub async fn post(&self, path: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.request(Method::POST, path, token, Some(body)).await
    }

    pub async fn put(&self, path: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.request(Method::PUT, path, token, Some(body)).await
    }

    pub async fn delete(&self, path: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::DELETE, path, token, None).await
    }

    pub async fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("failed to build request"),
            None => builder.body(Body::empty()).expect("failed to build request"),
        };

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }
}
