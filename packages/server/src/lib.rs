// Luna API core
//
// Backend for the Luna agent platform: users create AI agents, talk to them,
// group them into workspaces, and collaborate through teams. The interesting
// part of this crate is the authorization layer - session identity, the
// route classifier, and per-resource ownership checks.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;

