use sqlx::PgPool;
use tracing::info;

use crate::common::{ApiError, Identity, TeamId};
use crate::domains::teams::models::Team;

/// Delete a team. Creator only; memberships are removed with it.
pub async fn delete_team(identity: &Identity, id: TeamId, pool: &PgPool) -> Result<(), ApiError> {
    Team::delete_owned(id, identity.user_id, pool)
        .await?
        .ok_or(ApiError::NotFound)?;

    info!(team_id = %id, user_id = %identity.user_id, "team deleted");
    Ok(())
}
