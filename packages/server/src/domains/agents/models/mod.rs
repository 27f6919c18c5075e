pub mod agent;
pub mod message;

pub use agent::Agent;
pub use message::{Message, MessageRole};
