use serde::{Deserialize, Serialize};

use crate::domains::teams::models::Team;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamData {
    pub id: String,
    pub created_by: String,
    pub name: String,
    pub created_at: String,
}

impl From<Team> for TeamData {
    fn from(team: Team) -> Self {
        Self {
            id: team.id.to_string(),
            created_by: team.created_by.to_string(),
            name: team.name,
            created_at: team.created_at.to_rfc3339(),
        }
    }
}
