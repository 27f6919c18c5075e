use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::common::{AgentId, UserId, WorkspaceId};

/// Agent model - SQL persistence layer.
///
/// `persona` and `config` are caller-defined documents; the backend stores
/// and returns them opaquely.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Agent {
    pub id: AgentId,
    pub user_id: UserId,
    pub workspace_id: Option<WorkspaceId>,
    pub name: String,
    pub persona: serde_json::Value,
    pub config: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl Agent {
    /// Insert a new agent owned by `user_id`.
    pub async fn create(
        user_id: UserId,
        workspace_id: Option<WorkspaceId>,
        name: String,
        persona: serde_json::Value,
        config: serde_json::Value,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO agents (id, user_id, workspace_id, name, persona, config)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(AgentId::new())
        .bind(user_id)
        .bind(workspace_id)
        .bind(name)
        .bind(persona)
        .bind(config)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Find an agent by id, scoped to its owner.
    pub async fn find_owned(id: AgentId, user_id: UserId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM agents WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// All agents owned by a user, newest first.
    pub async fn find_by_owner(user_id: UserId, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM agents WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// All agents in a workspace, newest first. Deliberately not filtered by
    /// owner: workspace-scoped listing trusts the workspace id.
    pub async fn find_by_workspace(workspace_id: WorkspaceId, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM agents WHERE workspace_id = $1 ORDER BY created_at DESC",
        )
        .bind(workspace_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Replace the mutable fields of an owned agent.
    pub async fn update_owned(
        id: AgentId,
        user_id: UserId,
        workspace_id: Option<WorkspaceId>,
        name: String,
        persona: serde_json::Value,
        config: serde_json::Value,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "UPDATE agents
             SET workspace_id = $3, name = $4, persona = $5, config = $6
             WHERE id = $1 AND user_id = $2
             RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .bind(workspace_id)
        .bind(name)
        .bind(persona)
        .bind(config)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Delete an owned agent. Its messages go with it.
    pub async fn delete_owned(
        id: AgentId,
        user_id: UserId,
        pool: &PgPool,
    ) -> Result<Option<AgentId>> {
        sqlx::query_scalar::<_, AgentId>(
            "DELETE FROM agents WHERE id = $1 AND user_id = $2 RETURNING id",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }
}
