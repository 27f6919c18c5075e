use serde::Deserialize;
use sqlx::PgPool;
use tracing::info;

use crate::common::{ApiError, Identity, WorkspaceId};
use crate::domains::agents::models::Agent;
use crate::domains::agents::AgentData;

fn empty_object() -> serde_json::Value {
    serde_json::json!({})
}

#[derive(Debug, Deserialize)]
pub struct CreateAgentInput {
    #[serde(default)]
    pub name: String,
    pub workspace_id: Option<WorkspaceId>,
    #[serde(default = "empty_object")]
    pub persona: serde_json::Value,
    #[serde(default = "empty_object")]
    pub config: serde_json::Value,
}

/// Create an agent owned by the caller.
///
/// Name validation happens before any persistence call.
pub async fn create_agent(
    identity: &Identity,
    input: CreateAgentInput,
    pool: &PgPool,
) -> Result<AgentData, ApiError> {
    if input.name.trim().is_empty() {
        return Err(ApiError::validation("name is required"));
    }

    let agent = Agent::create(
        identity.user_id,
        input.workspace_id,
        input.name,
        input.persona,
        input.config,
        pool,
    )
    .await?;

    info!(agent_id = %agent.id, user_id = %identity.user_id, "agent created");

    Ok(AgentData::from(agent))
}
