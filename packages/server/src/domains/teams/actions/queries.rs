use std::collections::HashSet;

use sqlx::PgPool;

use crate::common::{Actor, ApiError, Identity, Resource, TeamId};
use crate::domains::teams::models::Team;
use crate::domains::teams::TeamData;

/// Fetch one team the caller can see (creator or member).
pub async fn get_team(
    identity: &Identity,
    id: TeamId,
    pool: &PgPool,
) -> Result<TeamData, ApiError> {
    Actor::new(identity.user_id)
        .reads(Resource::Team(id))
        .check(pool)
        .await?;

    let team = Team::find_by_id(id, pool).await?.ok_or(ApiError::NotFound)?;

    Ok(TeamData::from(team))
}

/// Every team visible to the caller: teams they created, plus teams they
/// hold a membership in.
///
/// The two queries are independent and run concurrently; the merge does not
/// care which finishes first. Created teams sort ahead of member-only teams,
/// and a team the caller both created and belongs to (the normal case, since
/// creation writes an admin membership) appears exactly once.
pub async fn visible_teams(identity: &Identity, pool: &PgPool) -> Result<Vec<TeamData>, ApiError> {
    let (created, member_of) = tokio::try_join!(
        Team::find_by_creator(identity.user_id, pool),
        Team::find_by_membership(identity.user_id, pool),
    )?;

    let mut seen: HashSet<TeamId> = HashSet::new();
    let mut teams = Vec::with_capacity(created.len() + member_of.len());

    for team in created.into_iter().chain(member_of) {
        if seen.insert(team.id) {
            teams.push(TeamData::from(team));
        }
    }

    Ok(teams)
}
