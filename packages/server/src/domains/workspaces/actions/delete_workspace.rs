use sqlx::PgPool;
use tracing::info;

use crate::common::{ApiError, Identity, WorkspaceId};
use crate::domains::workspaces::models::Workspace;

/// Delete an owned workspace.
pub async fn delete_workspace(
    identity: &Identity,
    id: WorkspaceId,
    pool: &PgPool,
) -> Result<(), ApiError> {
    Workspace::delete_owned(id, identity.user_id, pool)
        .await?
        .ok_or(ApiError::NotFound)?;

    info!(workspace_id = %id, user_id = %identity.user_id, "workspace deleted");
    Ok(())
}
