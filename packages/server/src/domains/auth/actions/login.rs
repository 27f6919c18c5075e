use serde::Deserialize;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::common::ApiError;
use crate::domains::auth::{password, SessionService};
use crate::domains::users::models::User;
use crate::domains::users::UserData;

#[derive(Debug, Deserialize)]
pub struct LoginInput {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// A successful login: the session token plus the user it identifies.
#[derive(Debug)]
pub struct LoginOutcome {
    pub token: String,
    pub user: UserData,
}

/// Verify credentials and issue a session.
///
/// Fails closed: an unknown email and a wrong password take the same exit
/// with the same error value, so the response reveals nothing about which
/// half was wrong.
pub async fn login(
    input: LoginInput,
    sessions: &SessionService,
    pool: &PgPool,
) -> Result<LoginOutcome, ApiError> {
    let user = User::find_by_email(&input.email, pool).await?;

    match user {
        Some(user) if password::verify_password(&input.password, &user.password_hash) => {
            let token = sessions.issue(user.id)?;
            info!(user_id = %user.id, "login succeeded");

            Ok(LoginOutcome {
                token,
                user: UserData::from(user),
            })
        }
        _ => {
            debug!("login failed");
            Err(ApiError::InvalidCredentials)
        }
    }
}
