use sqlx::PgPool;

use crate::common::{ApiError, Identity};
use crate::domains::users::models::User;
use crate::domains::users::UserData;

/// Resolve the current session to its user record.
pub async fn current_user(identity: &Identity, pool: &PgPool) -> Result<UserData, ApiError> {
    let user = User::find_by_id(identity.user_id, pool)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(UserData::from(user))
}
