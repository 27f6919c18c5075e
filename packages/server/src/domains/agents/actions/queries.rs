use sqlx::PgPool;

use crate::common::{Actor, AgentId, ApiError, Identity, Resource, WorkspaceId};
use crate::domains::agents::models::Agent;
use crate::domains::agents::AgentData;

/// Fetch one owned agent by id.
pub async fn get_agent(
    identity: &Identity,
    id: AgentId,
    pool: &PgPool,
) -> Result<AgentData, ApiError> {
    let agent = Agent::find_owned(id, identity.user_id, pool)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(AgentData::from(agent))
}

/// List agents, newest first.
///
/// Without a filter this is the caller's own agents. With `workspace_id`,
/// the listing is scoped to that workspace and open to any authenticated
/// caller - the workspace id itself is the trust boundary here.
pub async fn list_agents(
    identity: &Identity,
    workspace_id: Option<WorkspaceId>,
    pool: &PgPool,
) -> Result<Vec<AgentData>, ApiError> {
    let agents = match workspace_id {
        Some(workspace_id) => {
            Actor::new(identity.user_id)
                .reads(Resource::WorkspaceAgents(workspace_id))
                .check(pool)
                .await?;

            Agent::find_by_workspace(workspace_id, pool).await?
        }
        None => Agent::find_by_owner(identity.user_id, pool).await?,
    };

    Ok(agents.into_iter().map(AgentData::from).collect())
}
