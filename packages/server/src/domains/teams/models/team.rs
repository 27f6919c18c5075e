use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::common::{TeamId, UserId};

/// Team model - SQL persistence layer.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Team {
    pub id: TeamId,
    pub created_by: UserId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Team {
    /// Insert a new team. The accompanying admin membership is the caller's
    /// responsibility (see `actions::create_team`).
    pub async fn create(created_by: UserId, name: String, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO teams (id, created_by, name)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(TeamId::new())
        .bind(created_by)
        .bind(name)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Find a team by id, with no access scoping. Callers authorize first.
    pub async fn find_by_id(id: TeamId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM teams WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Teams created by a user, newest first.
    pub async fn find_by_creator(user_id: UserId, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM teams WHERE created_by = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Teams where the user holds a membership record, newest first.
    pub async fn find_by_membership(user_id: UserId, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT t.* FROM teams t
             JOIN team_members m ON m.team_id = t.id
             WHERE m.user_id = $1
             ORDER BY t.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Replace the mutable fields of a team, scoped to its creator.
    pub async fn update_owned(
        id: TeamId,
        user_id: UserId,
        name: String,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "UPDATE teams SET name = $3 WHERE id = $1 AND created_by = $2 RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .bind(name)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Delete a team, scoped to its creator. Memberships go with it.
    pub async fn delete_owned(id: TeamId, user_id: UserId, pool: &PgPool) -> Result<Option<TeamId>> {
        sqlx::query_scalar::<_, TeamId>(
            "DELETE FROM teams WHERE id = $1 AND created_by = $2 RETURNING id",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }
}
