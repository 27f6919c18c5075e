use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::common::{AgentId, MessageId};

/// Listing cap: a single query never returns more than this many messages.
pub const MESSAGE_PAGE_LIMIT: i64 = 50;

/// Message - one entry in an agent's conversation log.
///
/// Messages are immutable once created; there is no update or delete path.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Message {
    pub id: MessageId,
    pub agent_id: AgentId,
    pub role: String, // 'user', 'assistant', 'system'
    pub content: String,
    pub tool_calls: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

/// Message role enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
            MessageRole::System => write!(f, "system"),
        }
    }
}

impl std::str::FromStr for MessageRole {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            "system" => Ok(MessageRole::System),
            _ => Err(anyhow::anyhow!("Invalid message role: {}", s)),
        }
    }
}

impl Message {
    /// Append a message to an agent's log.
    pub async fn create(
        agent_id: AgentId,
        role: MessageRole,
        content: String,
        tool_calls: Option<serde_json::Value>,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO messages (id, agent_id, role, content, tool_calls)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(MessageId::new())
        .bind(agent_id)
        .bind(role.to_string())
        .bind(content)
        .bind(tool_calls)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// The most recent messages for an agent, newest first, capped at
    /// [`MESSAGE_PAGE_LIMIT`]. The id tiebreak keeps the order stable when
    /// timestamps collide (ids are time-ordered v7).
    pub async fn find_recent(agent_id: AgentId, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM messages
             WHERE agent_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2",
        )
        .bind(agent_id)
        .bind(MESSAGE_PAGE_LIMIT)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
