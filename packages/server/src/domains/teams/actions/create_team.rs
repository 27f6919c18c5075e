use serde::Deserialize;
use sqlx::PgPool;
use tracing::{error, info};

use crate::common::{ApiError, Identity};
use crate::domains::teams::models::{Team, TeamMember, TeamRole};
use crate::domains::teams::TeamData;

#[derive(Debug, Deserialize)]
pub struct CreateTeamInput {
    #[serde(default)]
    pub name: String,
}

/// Create a team plus the creator's admin membership.
///
/// The two inserts run in sequence without a wrapping transaction. If the
/// membership insert fails the team stays behind with zero members; the
/// creator-ownership rule still reaches it, so it is recoverable, but it
/// only surfaces through the creator-query half of `visible_teams`.
pub async fn create_team(
    identity: &Identity,
    input: CreateTeamInput,
    pool: &PgPool,
) -> Result<TeamData, ApiError> {
    if input.name.trim().is_empty() {
        return Err(ApiError::validation("name is required"));
    }

    let team = Team::create(identity.user_id, input.name, pool).await?;

    if let Err(e) = TeamMember::create(team.id, identity.user_id, TeamRole::Admin, pool).await {
        error!(team_id = %team.id, error = %e, "admin membership insert failed; team is orphaned");
        return Err(ApiError::Database(e));
    }

    info!(team_id = %team.id, user_id = %identity.user_id, "team created");

    Ok(TeamData::from(team))
}
