//! Test fixtures for creating test data.
//!
//! Fixtures use the model methods directly. Tests share one database, so
//! anything with a uniqueness constraint gets a random component.

use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use luna_core::common::{AgentId, UserId, WorkspaceId};
use luna_core::domains::agents::models::{Agent, Message, MessageRole};
use luna_core::domains::auth::password;
use luna_core::domains::users::models::User;
use luna_core::domains::workspaces::models::Workspace;

/// Password every fixture user is created with.
pub const FIXTURE_PASSWORD: &str = "secret1";

/// A unique email address for this test run.
pub fn unique_email(prefix: &str) -> String {
    format!("{}+{}@example.com", prefix, Uuid::new_v4().simple())
}

/// Create a user with [`FIXTURE_PASSWORD`] and return its id.
pub async fn create_test_user(pool: &PgPool, email: &str, name: &str) -> Result<UserId> {
    let password_hash = password::hash_password(FIXTURE_PASSWORD)?;
    let user = User::create(email.to_string(), password_hash, name.to_string(), pool).await?;

    Ok(user.id)
}

/// Create a workspace owned by `user_id`.
pub async fn create_test_workspace(
    pool: &PgPool,
    user_id: UserId,
    name: &str,
) -> Result<WorkspaceId> {
    let workspace = Workspace::create(user_id, name.to_string(), pool).await?;

    Ok(workspace.id)
}

/// Create an agent owned by `user_id`, optionally inside a workspace.
pub async fn create_test_agent(
    pool: &PgPool,
    user_id: UserId,
    workspace_id: Option<WorkspaceId>,
    name: &str,
) -> Result<AgentId> {
    let agent = Agent::create(
        user_id,
        workspace_id,
        name.to_string(),
        serde_json::json!({}),
        serde_json::json!({}),
        pool,
    )
    .await?;

    Ok(agent.id)
}

/// Append a user-role message to an agent's log.
pub async fn create_test_message(pool: &PgPool, agent_id: AgentId, content: &str) -> Result<()> {
    Message::create(agent_id, MessageRole::User, content.to_string(), None, pool).await?;

    Ok(())
}
