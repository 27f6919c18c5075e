/// Authorization module for the Luna backend.
///
/// Provides a fluent API for ownership checks in action code:
///
/// ```rust,ignore
/// use luna_core::common::{Actor, Resource};
///
/// // Before touching an agent's messages:
/// Actor::new(identity.user_id)
///     .reads(Resource::Agent(agent_id))
///     .check(pool)
///     .await?;
/// ```
///
/// Checks either pass or fail with `AuthError::NotFound`; the caller can
/// never learn whether a denied resource exists. Simple by-id CRUD does not
/// go through this module - there, ownership lives in the SQL filter itself
/// (`WHERE id = $1 AND user_id = $2`), which yields the same NotFound
/// conflation in a single query.
mod errors;
mod guard;
mod resource;

pub use errors::AuthError;
pub use guard::{AccessCheck, Actor};
pub use resource::{Action, Resource};

use crate::common::UserId;

/// The resolved identity of the current request: a verified session maps to
/// exactly one of these, everything else is anonymous. Always passed
/// explicitly into actions and guard checks, never held in ambient state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
}

impl Identity {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}
