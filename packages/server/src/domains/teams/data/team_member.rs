use serde::{Deserialize, Serialize};

use crate::domains::teams::models::TeamMember;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMemberData {
    pub id: String,
    pub team_id: String,
    pub user_id: String,
    /// Role: admin, member
    pub role: String,
    pub created_at: String,
}

impl From<TeamMember> for TeamMemberData {
    fn from(m: TeamMember) -> Self {
        Self {
            id: m.id.to_string(),
            team_id: m.team_id.to_string(),
            user_id: m.user_id.to_string(),
            role: m.role,
            created_at: m.created_at.to_rfc3339(),
        }
    }
}
