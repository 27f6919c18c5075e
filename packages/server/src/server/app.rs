//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method, StatusCode,
    },
    middleware,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Environment;
use crate::domains::auth::SessionService;
use crate::server::middleware::{identity_middleware, page_route_guard};
use crate::server::routes::{
    add_member_handler, create_agent_handler, create_message_handler, create_team_handler,
    create_workspace_handler, delete_agent_handler, delete_team_handler,
    delete_workspace_handler, get_agent_handler, get_team_handler, get_workspace_handler,
    health_handler, list_agents_handler, list_members_handler, list_messages_handler,
    list_teams_handler, list_workspaces_handler, login_handler, logout_handler, me_handler,
    register_handler, update_agent_handler, update_team_handler, update_workspace_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub sessions: Arc<SessionService>,
    pub secure_cookies: bool,
}

/// Pages are rendered by the separate web frontend; anything that falls
/// through the API routes (after the route guard has had its say) is not ours.
async fn page_fallback() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Build the Axum application router
pub fn build_app(
    pool: PgPool,
    sessions: Arc<SessionService>,
    environment: Environment,
    allowed_origins: Vec<String>,
) -> Router {
    let app_state = AppState {
        db_pool: pool,
        sessions: sessions.clone(),
        secure_cookies: environment.is_production(),
    };

    // CORS configuration - wide open unless origins are pinned down
    let cors = if allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([AUTHORIZATION, CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([AUTHORIZATION, CONTENT_TYPE])
    };

    Router::new()
        // Auth
        .route("/api/auth/register", post(register_handler))
        .route("/api/auth/login", post(login_handler))
        .route("/api/auth/logout", post(logout_handler))
        .route("/api/auth/me", get(me_handler))
        // Workspaces
        .route(
            "/api/workspaces",
            get(list_workspaces_handler).post(create_workspace_handler),
        )
        .route(
            "/api/workspaces/:id",
            get(get_workspace_handler)
                .put(update_workspace_handler)
                .delete(delete_workspace_handler),
        )
        // Agents and their message logs
        .route(
            "/api/agents",
            get(list_agents_handler).post(create_agent_handler),
        )
        .route(
            "/api/agents/:id",
            get(get_agent_handler)
                .put(update_agent_handler)
                .delete(delete_agent_handler),
        )
        .route(
            "/api/agents/:id/messages",
            get(list_messages_handler).post(create_message_handler),
        )
        // Teams
        .route("/api/teams", get(list_teams_handler).post(create_team_handler))
        .route(
            "/api/teams/:id",
            get(get_team_handler)
                .put(update_team_handler)
                .delete(delete_team_handler),
        )
        .route(
            "/api/teams/:id/members",
            get(list_members_handler).post(add_member_handler),
        )
        // Health check
        .route("/health", get(health_handler))
        // Page paths are served elsewhere; the fallback keeps the route
        // guard in the request path for them.
        .fallback(page_fallback)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(page_route_guard)) // Redirect policy for page routes
        .layer(middleware::from_fn(move |req, next| {
            identity_middleware(sessions.clone(), req, next)
        })) // Session token -> Identity
        .layer(Extension(app_state)) // Shared state (must be after middlewares that need it)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
