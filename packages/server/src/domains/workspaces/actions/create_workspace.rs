use serde::Deserialize;
use sqlx::PgPool;
use tracing::info;

use crate::common::{ApiError, Identity};
use crate::domains::workspaces::models::Workspace;
use crate::domains::workspaces::WorkspaceData;

#[derive(Debug, Deserialize)]
pub struct CreateWorkspaceInput {
    #[serde(default)]
    pub name: String,
}

/// Create a workspace owned by the caller.
pub async fn create_workspace(
    identity: &Identity,
    input: CreateWorkspaceInput,
    pool: &PgPool,
) -> Result<WorkspaceData, ApiError> {
    if input.name.trim().is_empty() {
        return Err(ApiError::validation("name is required"));
    }

    let workspace = Workspace::create(identity.user_id, input.name, pool).await?;
    info!(workspace_id = %workspace.id, user_id = %identity.user_id, "workspace created");

    Ok(WorkspaceData::from(workspace))
}
