use serde::Deserialize;
use sqlx::PgPool;
use tracing::info;

use crate::common::ApiError;
use crate::domains::auth::password;
use crate::domains::users::models::User;
use crate::domains::users::UserData;

#[derive(Debug, Deserialize)]
pub struct RegisterInput {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
}

/// Register a new user.
///
/// Validation runs before anything touches the database. Duplicate emails
/// (case-insensitive) are a validation failure, with the unique index on
/// `lower(email)` as the backstop for concurrent registrations.
pub async fn register(input: RegisterInput, pool: &PgPool) -> Result<UserData, ApiError> {
    if input.email.trim().is_empty() {
        return Err(ApiError::validation("email is required"));
    }
    if input.password.is_empty() {
        return Err(ApiError::validation("password is required"));
    }
    if input.name.trim().is_empty() {
        return Err(ApiError::validation("name is required"));
    }

    if User::find_by_email(&input.email, pool).await?.is_some() {
        return Err(ApiError::validation("email already registered"));
    }

    let password_hash = password::hash_password(&input.password)?;

    let user = User::create(input.email, password_hash, input.name, pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => {
                ApiError::validation("email already registered")
            }
            _ => ApiError::Database(e),
        })?;

    info!(user_id = %user.id, "user registered");

    Ok(UserData::from(user))
}
