use serde::Deserialize;
use sqlx::PgPool;

use crate::common::{ApiError, Identity, WorkspaceId};
use crate::domains::workspaces::models::Workspace;
use crate::domains::workspaces::WorkspaceData;

#[derive(Debug, Deserialize)]
pub struct UpdateWorkspaceInput {
    #[serde(default)]
    pub name: String,
}

/// Replace the mutable fields of an owned workspace.
///
/// A workspace that does not exist and one owned by someone else are the
/// same `NotFound`.
pub async fn update_workspace(
    identity: &Identity,
    id: WorkspaceId,
    input: UpdateWorkspaceInput,
    pool: &PgPool,
) -> Result<WorkspaceData, ApiError> {
    if input.name.trim().is_empty() {
        return Err(ApiError::validation("name is required"));
    }

    let workspace = Workspace::update_owned(id, identity.user_id, input.name, pool)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(WorkspaceData::from(workspace))
}
