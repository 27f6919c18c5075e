use serde::{Deserialize, Serialize};

use crate::domains::agents::models::Message;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageData {
    pub id: String,
    pub agent_id: String,
    /// Role: user, assistant, system
    pub role: String,
    pub content: String,
    pub tool_calls: Option<serde_json::Value>,
    pub created_at: String,
}

impl From<Message> for MessageData {
    fn from(m: Message) -> Self {
        Self {
            id: m.id.to_string(),
            agent_id: m.agent_id.to_string(),
            role: m.role,
            content: m.content,
            tool_calls: m.tool_calls,
            created_at: m.created_at.to_rfc3339(),
        }
    }
}
