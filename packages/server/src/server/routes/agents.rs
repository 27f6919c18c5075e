use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::common::{AgentId, ApiError, Identity, WorkspaceId};
use crate::domains::agents::actions::{
    self, CreateAgentInput, CreateMessageInput, UpdateAgentInput,
};
use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
pub struct ListAgentsQuery {
    pub workspace_id: Option<WorkspaceId>,
}

/// POST /api/agents
pub async fn create_agent_handler(
    Extension(state): Extension<AppState>,
    identity: Identity,
    Json(input): Json<CreateAgentInput>,
) -> Result<impl IntoResponse, ApiError> {
    let agent = actions::create_agent(&identity, input, &state.db_pool).await?;

    Ok((StatusCode::CREATED, Json(agent)))
}

/// GET /api/agents?workspace_id=...
pub async fn list_agents_handler(
    Extension(state): Extension<AppState>,
    identity: Identity,
    Query(query): Query<ListAgentsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let agents = actions::list_agents(&identity, query.workspace_id, &state.db_pool).await?;

    Ok(Json(agents))
}

/// GET /api/agents/{id}
pub async fn get_agent_handler(
    Extension(state): Extension<AppState>,
    identity: Identity,
    Path(id): Path<AgentId>,
) -> Result<impl IntoResponse, ApiError> {
    let agent = actions::get_agent(&identity, id, &state.db_pool).await?;

    Ok(Json(agent))
}

/// PUT /api/agents/{id}
pub async fn update_agent_handler(
    Extension(state): Extension<AppState>,
    identity: Identity,
    Path(id): Path<AgentId>,
    Json(input): Json<UpdateAgentInput>,
) -> Result<impl IntoResponse, ApiError> {
    let agent = actions::update_agent(&identity, id, input, &state.db_pool).await?;

    Ok(Json(agent))
}

/// DELETE /api/agents/{id}
pub async fn delete_agent_handler(
    Extension(state): Extension<AppState>,
    identity: Identity,
    Path(id): Path<AgentId>,
) -> Result<impl IntoResponse, ApiError> {
    actions::delete_agent(&identity, id, &state.db_pool).await?;

    Ok(Json(json!({ "success": true })))
}

/// GET /api/agents/{id}/messages
pub async fn list_messages_handler(
    Extension(state): Extension<AppState>,
    identity: Identity,
    Path(id): Path<AgentId>,
) -> Result<impl IntoResponse, ApiError> {
    let messages = actions::list_messages(&identity, id, &state.db_pool).await?;

    Ok(Json(messages))
}

/// POST /api/agents/{id}/messages
pub async fn create_message_handler(
    Extension(state): Extension<AppState>,
    identity: Identity,
    Path(id): Path<AgentId>,
    Json(input): Json<CreateMessageInput>,
) -> Result<impl IntoResponse, ApiError> {
    let message = actions::create_message(&identity, id, input, &state.db_pool).await?;

    Ok((StatusCode::CREATED, Json(message)))
}
