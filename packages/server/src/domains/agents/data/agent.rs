use serde::{Deserialize, Serialize};

use crate::domains::agents::models::Agent;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentData {
    pub id: String,
    pub user_id: String,
    pub workspace_id: Option<String>,
    pub name: String,
    /// Caller-defined persona document, returned as stored.
    pub persona: serde_json::Value,
    /// Caller-defined configuration document, returned as stored.
    pub config: serde_json::Value,
    pub created_at: String,
}

impl From<Agent> for AgentData {
    fn from(agent: Agent) -> Self {
        Self {
            id: agent.id.to_string(),
            user_id: agent.user_id.to_string(),
            workspace_id: agent.workspace_id.map(|id| id.to_string()),
            name: agent.name,
            persona: agent.persona,
            config: agent.config,
            created_at: agent.created_at.to_rfc3339(),
        }
    }
}
