//! Typed ID definitions for all domain entities.
//!
//! One alias per entity; the marker types exist only to make the aliases
//! mutually incompatible at compile time.

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for User entities (accounts).
pub struct User;

/// Marker type for Workspace entities (single-owner agent containers).
pub struct Workspace;

/// Marker type for Agent entities.
pub struct Agent;

/// Marker type for Message entities (agent conversation log).
pub struct Message;

/// Marker type for Team entities.
pub struct Team;

/// Marker type for TeamMember entities (user-team join records).
pub struct TeamMember;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for User entities.
pub type UserId = Id<User>;

/// Typed ID for Workspace entities.
pub type WorkspaceId = Id<Workspace>;

/// Typed ID for Agent entities.
pub type AgentId = Id<Agent>;

/// Typed ID for Message entities.
pub type MessageId = Id<Message>;

/// Typed ID for Team entities.
pub type TeamId = Id<Team>;

/// Typed ID for TeamMember entities.
pub type TeamMemberId = Id<TeamMember>;
