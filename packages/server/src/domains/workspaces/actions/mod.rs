//! Workspace domain actions.

mod create_workspace;
mod delete_workspace;
mod queries;
mod update_workspace;

pub use create_workspace::{create_workspace, CreateWorkspaceInput};
pub use delete_workspace::delete_workspace;
pub use queries::{get_workspace, list_workspaces};
pub use update_workspace::{update_workspace, UpdateWorkspaceInput};
