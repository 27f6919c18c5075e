use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::common::{ApiError, Identity, WorkspaceId};
use crate::domains::workspaces::actions::{self, CreateWorkspaceInput, UpdateWorkspaceInput};
use crate::server::app::AppState;

/// POST /api/workspaces
pub async fn create_workspace_handler(
    Extension(state): Extension<AppState>,
    identity: Identity,
    Json(input): Json<CreateWorkspaceInput>,
) -> Result<impl IntoResponse, ApiError> {
    let workspace = actions::create_workspace(&identity, input, &state.db_pool).await?;

    Ok((StatusCode::CREATED, Json(workspace)))
}

/// GET /api/workspaces
pub async fn list_workspaces_handler(
    Extension(state): Extension<AppState>,
    identity: Identity,
) -> Result<impl IntoResponse, ApiError> {
    let workspaces = actions::list_workspaces(&identity, &state.db_pool).await?;

    Ok(Json(workspaces))
}

/// GET /api/workspaces/{id}
pub async fn get_workspace_handler(
    Extension(state): Extension<AppState>,
    identity: Identity,
    Path(id): Path<WorkspaceId>,
) -> Result<impl IntoResponse, ApiError> {
    let workspace = actions::get_workspace(&identity, id, &state.db_pool).await?;

    Ok(Json(workspace))
}

/// PUT /api/workspaces/{id}
pub async fn update_workspace_handler(
    Extension(state): Extension<AppState>,
    identity: Identity,
    Path(id): Path<WorkspaceId>,
    Json(input): Json<UpdateWorkspaceInput>,
) -> Result<impl IntoResponse, ApiError> {
    let workspace = actions::update_workspace(&identity, id, input, &state.db_pool).await?;

    Ok(Json(workspace))
}

/// DELETE /api/workspaces/{id}
pub async fn delete_workspace_handler(
    Extension(state): Extension<AppState>,
    identity: Identity,
    Path(id): Path<WorkspaceId>,
) -> Result<impl IntoResponse, ApiError> {
    actions::delete_workspace(&identity, id, &state.db_pool).await?;

    Ok(Json(json!({ "success": true })))
}
