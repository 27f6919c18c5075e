use sqlx::PgPool;
use tracing::info;

use crate::common::{AgentId, ApiError, Identity};
use crate::domains::agents::models::Agent;

/// Delete an owned agent and, through the schema, its message log.
pub async fn delete_agent(
    identity: &Identity,
    id: AgentId,
    pool: &PgPool,
) -> Result<(), ApiError> {
    Agent::delete_owned(id, identity.user_id, pool)
        .await?
        .ok_or(ApiError::NotFound)?;

    info!(agent_id = %id, user_id = %identity.user_id, "agent deleted");
    Ok(())
}
