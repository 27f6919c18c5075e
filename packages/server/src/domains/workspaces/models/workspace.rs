use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::common::{UserId, WorkspaceId};

/// Workspace model - SQL persistence layer.
///
/// Every query that addresses a workspace by id also filters on the owner,
/// so a missing row and a foreign row are indistinguishable to callers.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub user_id: UserId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Workspace {
    /// Insert a new workspace owned by `user_id`. The owner is immutable
    /// after this point.
    pub async fn create(user_id: UserId, name: String, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO workspaces (id, user_id, name)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(WorkspaceId::new())
        .bind(user_id)
        .bind(name)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Find a workspace by id, scoped to its owner.
    pub async fn find_owned(
        id: WorkspaceId,
        user_id: UserId,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM workspaces WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// All workspaces owned by a user, newest first.
    pub async fn find_by_owner(user_id: UserId, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM workspaces WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Replace the mutable fields of an owned workspace. Returns `None` when
    /// no row matched the (id, owner) pair.
    pub async fn update_owned(
        id: WorkspaceId,
        user_id: UserId,
        name: String,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "UPDATE workspaces SET name = $3 WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .bind(name)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Delete an owned workspace. Agents keep existing; their workspace link
    /// is cleared by the foreign key.
    pub async fn delete_owned(
        id: WorkspaceId,
        user_id: UserId,
        pool: &PgPool,
    ) -> Result<Option<WorkspaceId>> {
        sqlx::query_scalar::<_, WorkspaceId>(
            "DELETE FROM workspaces WHERE id = $1 AND user_id = $2 RETURNING id",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }
}
