// Business domains
pub mod agents;
pub mod auth;
pub mod teams;
pub mod users;
pub mod workspaces;
