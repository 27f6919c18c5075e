use serde::Deserialize;
use sqlx::PgPool;
use std::str::FromStr;

use crate::common::{Actor, AgentId, ApiError, Identity, Resource};
use crate::domains::agents::models::{Message, MessageRole};
use crate::domains::agents::MessageData;

#[derive(Debug, Deserialize)]
pub struct CreateMessageInput {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
    pub tool_calls: Option<serde_json::Value>,
}

/// List an agent's most recent messages, newest first.
///
/// The parent agent is authorized before any message row is read.
pub async fn list_messages(
    identity: &Identity,
    agent_id: AgentId,
    pool: &PgPool,
) -> Result<Vec<MessageData>, ApiError> {
    Actor::new(identity.user_id)
        .reads(Resource::Agent(agent_id))
        .check(pool)
        .await?;

    let messages = Message::find_recent(agent_id, pool).await?;

    Ok(messages.into_iter().map(MessageData::from).collect())
}

/// Append a message to an agent's log.
///
/// Same transitive rule as listing: the parent agent is authorized first.
pub async fn create_message(
    identity: &Identity,
    agent_id: AgentId,
    input: CreateMessageInput,
    pool: &PgPool,
) -> Result<MessageData, ApiError> {
    Actor::new(identity.user_id)
        .mutates(Resource::Agent(agent_id))
        .check(pool)
        .await?;

    let role = MessageRole::from_str(&input.role)
        .map_err(|_| ApiError::validation("role must be one of: user, assistant, system"))?;

    if input.content.is_empty() {
        return Err(ApiError::validation("content is required"));
    }

    let message = Message::create(agent_id, role, input.content, input.tool_calls, pool).await?;

    Ok(MessageData::from(message))
}
