use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::common::{TeamId, TeamMemberId, UserId};

/// TeamMember - a role-tagged join between a user and a team, distinct from
/// team creatorship.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct TeamMember {
    pub id: TeamMemberId,
    pub team_id: TeamId,
    pub user_id: UserId,
    pub role: String, // 'admin', 'member'
    pub created_at: DateTime<Utc>,
}

/// Membership role enum. Only `admin` carries meaning today; other roles are
/// modeled but grant nothing beyond visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamRole {
    Admin,
    Member,
}

impl std::fmt::Display for TeamRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamRole::Admin => write!(f, "admin"),
            TeamRole::Member => write!(f, "member"),
        }
    }
}

impl std::str::FromStr for TeamRole {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "admin" => Ok(TeamRole::Admin),
            "member" => Ok(TeamRole::Member),
            _ => Err(anyhow::anyhow!("Invalid team role: {}", s)),
        }
    }
}

impl TeamMember {
    /// Insert a membership record. The `(team_id, user_id)` unique constraint
    /// rejects duplicates; the raw `sqlx::Error` is returned so callers can
    /// translate that case.
    pub async fn create(
        team_id: TeamId,
        user_id: UserId,
        role: TeamRole,
        pool: &PgPool,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO team_members (id, team_id, user_id, role)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(TeamMemberId::new())
        .bind(team_id)
        .bind(user_id)
        .bind(role.to_string())
        .fetch_one(pool)
        .await
    }

    /// All memberships of a team, oldest first (the creator-admin record
    /// comes first by construction).
    pub async fn find_for_team(team_id: TeamId, pool: &PgPool) -> anyhow::Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM team_members WHERE team_id = $1 ORDER BY created_at ASC",
        )
        .bind(team_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
