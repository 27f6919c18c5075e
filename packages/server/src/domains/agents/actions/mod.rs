//! Agent domain actions - agent CRUD and the message log.

mod create_agent;
mod delete_agent;
mod messages;
mod queries;
mod update_agent;

pub use create_agent::{create_agent, CreateAgentInput};
pub use delete_agent::delete_agent;
pub use messages::{create_message, list_messages, CreateMessageInput};
pub use queries::{get_agent, list_agents};
pub use update_agent::{update_agent, UpdateAgentInput};
