//! Agent domain - user-owned AI agents and their conversation messages.
//!
//! Messages have no identity of their own: every access path authorizes the
//! parent agent first.

pub mod actions;
pub mod data;
pub mod models;

pub use data::{AgentData, MessageData};
pub use models::agent::Agent;
pub use models::message::{Message, MessageRole};
