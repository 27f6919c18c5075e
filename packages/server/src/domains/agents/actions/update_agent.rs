use serde::Deserialize;
use sqlx::PgPool;

use crate::common::{AgentId, ApiError, Identity, WorkspaceId};
use crate::domains::agents::models::Agent;
use crate::domains::agents::AgentData;

fn empty_object() -> serde_json::Value {
    serde_json::json!({})
}

#[derive(Debug, Deserialize)]
pub struct UpdateAgentInput {
    #[serde(default)]
    pub name: String,
    pub workspace_id: Option<WorkspaceId>,
    #[serde(default = "empty_object")]
    pub persona: serde_json::Value,
    #[serde(default = "empty_object")]
    pub config: serde_json::Value,
}

/// Full replace of an owned agent's mutable fields (name, workspace link,
/// persona, config).
pub async fn update_agent(
    identity: &Identity,
    id: AgentId,
    input: UpdateAgentInput,
    pool: &PgPool,
) -> Result<AgentData, ApiError> {
    if input.name.trim().is_empty() {
        return Err(ApiError::validation("name is required"));
    }

    let agent = Agent::update_owned(
        id,
        identity.user_id,
        input.workspace_id,
        input.name,
        input.persona,
        input.config,
        pool,
    )
    .await?
    .ok_or(ApiError::NotFound)?;

    Ok(AgentData::from(agent))
}
