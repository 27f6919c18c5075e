use serde::Deserialize;
use sqlx::PgPool;

use crate::common::{ApiError, Identity, TeamId};
use crate::domains::teams::models::Team;
use crate::domains::teams::TeamData;

#[derive(Debug, Deserialize)]
pub struct UpdateTeamInput {
    #[serde(default)]
    pub name: String,
}

/// Replace the mutable fields of a team. Creator only - membership, admin
/// role included, grants no mutation rights.
pub async fn update_team(
    identity: &Identity,
    id: TeamId,
    input: UpdateTeamInput,
    pool: &PgPool,
) -> Result<TeamData, ApiError> {
    if input.name.trim().is_empty() {
        return Err(ApiError::validation("name is required"));
    }

    let team = Team::update_owned(id, identity.user_id, input.name, pool)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(TeamData::from(team))
}
