// HTTP routes
pub mod agents;
pub mod auth;
pub mod health;
pub mod teams;
pub mod workspaces;

pub use agents::*;
pub use auth::*;
pub use health::*;
pub use teams::*;
pub use workspaces::*;
