use serde::Deserialize;
use sqlx::PgPool;
use std::str::FromStr;
use tracing::info;

use crate::common::{Actor, ApiError, Identity, Resource, TeamId, UserId};
use crate::domains::teams::models::{TeamMember, TeamRole};
use crate::domains::teams::TeamMemberData;

#[derive(Debug, Deserialize)]
pub struct AddMemberInput {
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Add a user to a team. Creator only.
pub async fn add_member(
    identity: &Identity,
    team_id: TeamId,
    input: AddMemberInput,
    pool: &PgPool,
) -> Result<TeamMemberData, ApiError> {
    Actor::new(identity.user_id)
        .mutates(Resource::Team(team_id))
        .check(pool)
        .await?;

    let user_id = input
        .user_id
        .ok_or_else(|| ApiError::validation("user_id is required"))?;

    let role = match input.role.as_deref() {
        None | Some("") => TeamRole::Member,
        Some(raw) => TeamRole::from_str(raw)
            .map_err(|_| ApiError::validation("role must be one of: admin, member"))?,
    };

    let member = TeamMember::create(team_id, user_id, role, pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => {
                ApiError::validation("user is already a member of this team")
            }
            Some(db_err) if db_err.is_foreign_key_violation() => {
                ApiError::validation("no such user")
            }
            _ => ApiError::Database(e),
        })?;

    info!(team_id = %team_id, user_id = %user_id, "team member added");

    Ok(TeamMemberData::from(member))
}

/// List a team's memberships. Visible to the creator and to members.
pub async fn list_members(
    identity: &Identity,
    team_id: TeamId,
    pool: &PgPool,
) -> Result<Vec<TeamMemberData>, ApiError> {
    Actor::new(identity.user_id)
        .reads(Resource::Team(team_id))
        .check(pool)
        .await?;

    let members = TeamMember::find_for_team(team_id, pool).await?;

    Ok(members.into_iter().map(TeamMemberData::from).collect())
}
