use sqlx::PgPool;

use super::{Action, AuthError, Resource};
use crate::common::UserId;

/// Entry point for authorization checks
///
/// Usage:
/// ```rust,ignore
/// Actor::new(identity.user_id)
///     .mutates(Resource::Team(team_id))
///     .check(&pool)
///     .await?;
/// ```
pub struct Actor {
    user_id: UserId,
}

impl Actor {
    /// Create a new actor for authorization checks. The `user_id` comes from
    /// a verified session - anonymous requests never reach this point.
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }

    /// The actor wants to read the resource (or list its children).
    pub fn reads(self, resource: Resource) -> AccessCheck {
        AccessCheck {
            user_id: self.user_id,
            resource,
            action: Action::Read,
        }
    }

    /// The actor wants to create under, update, or delete the resource.
    pub fn mutates(self, resource: Resource) -> AccessCheck {
        AccessCheck {
            user_id: self.user_id,
            resource,
            action: Action::Mutate,
        }
    }
}

/// A pending authorization decision.
pub struct AccessCheck {
    user_id: UserId,
    resource: Resource,
    action: Action,
}

impl AccessCheck {
    /// Perform the check against the database.
    ///
    /// # Errors
    ///
    /// `AuthError::NotFound` on denial or missing record (indistinguishable
    /// on purpose), `AuthError::Database` if the query itself fails.
    pub async fn check(self, pool: &PgPool) -> Result<(), AuthError> {
        let allowed = match self.resource {
            // Agents are owned outright; both read and mutate require the
            // owner. Message access funnels through this arm.
            Resource::Agent(agent_id) => {
                sqlx::query_scalar::<_, i32>(
                    "SELECT 1 FROM agents WHERE id = $1 AND user_id = $2",
                )
                .bind(agent_id)
                .bind(self.user_id)
                .fetch_optional(pool)
                .await?
                .is_some()
            }

            // Workspace-scoped listing is open to any authenticated actor;
            // there is no mutate form of this scope.
            Resource::WorkspaceAgents(_) => self.action == Action::Read,

            // Teams: the creator has full access, members get read access.
            Resource::Team(team_id) => match self.action {
                Action::Read => {
                    sqlx::query_scalar::<_, i32>(
                        "SELECT 1 FROM teams t
                         WHERE t.id = $1
                           AND (t.created_by = $2
                                OR EXISTS (SELECT 1 FROM team_members m
                                           WHERE m.team_id = t.id AND m.user_id = $2))",
                    )
                    .bind(team_id)
                    .bind(self.user_id)
                    .fetch_optional(pool)
                    .await?
                    .is_some()
                }
                Action::Mutate => {
                    sqlx::query_scalar::<_, i32>(
                        "SELECT 1 FROM teams WHERE id = $1 AND created_by = $2",
                    )
                    .bind(team_id)
                    .bind(self.user_id)
                    .fetch_optional(pool)
                    .await?
                    .is_some()
                }
            },
        };

        if allowed {
            tracing::debug!(user_id = %self.user_id, resource = ?self.resource,
                action = ?self.action, "access granted");
            Ok(())
        } else {
            tracing::debug!(user_id = %self.user_id, resource = ?self.resource,
                action = ?self.action, "access denied");
            Err(AuthError::NotFound)
        }
    }
}
