use serde::{Deserialize, Serialize};

use crate::domains::workspaces::models::Workspace;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceData {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub created_at: String,
}

impl From<Workspace> for WorkspaceData {
    fn from(workspace: Workspace) -> Self {
        Self {
            id: workspace.id.to_string(),
            user_id: workspace.user_id.to_string(),
            name: workspace.name,
            created_at: workspace.created_at.to_rfc3339(),
        }
    }
}
