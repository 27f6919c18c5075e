use thiserror::Error;

use crate::common::ApiError;

/// Authorization errors.
///
/// A denied check and a missing record are deliberately the same variant:
/// callers (and therefore API clients) cannot distinguish "exists but is
/// not yours" from "does not exist".
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("authentication required")]
    AuthenticationRequired,

    #[error("not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationRequired => ApiError::Unauthenticated,
            AuthError::NotFound => ApiError::NotFound,
            AuthError::Database(e) => ApiError::Database(e),
        }
    }
}
