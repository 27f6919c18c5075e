use sqlx::PgPool;

use crate::common::{ApiError, Identity, WorkspaceId};
use crate::domains::workspaces::models::Workspace;
use crate::domains::workspaces::WorkspaceData;

/// Fetch one owned workspace by id.
pub async fn get_workspace(
    identity: &Identity,
    id: WorkspaceId,
    pool: &PgPool,
) -> Result<WorkspaceData, ApiError> {
    let workspace = Workspace::find_owned(id, identity.user_id, pool)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(WorkspaceData::from(workspace))
}

/// List the caller's workspaces, newest first.
pub async fn list_workspaces(
    identity: &Identity,
    pool: &PgPool,
) -> Result<Vec<WorkspaceData>, ApiError> {
    let workspaces = Workspace::find_by_owner(identity.user_id, pool).await?;

    Ok(workspaces.into_iter().map(WorkspaceData::from).collect())
}
