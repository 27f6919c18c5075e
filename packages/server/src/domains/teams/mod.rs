//! Team domain - multi-principal collaboration.
//!
//! Teams are the one place where access is not plain single-owner equality:
//! visibility is creatorship-or-membership, mutation stays creator-only.

pub mod actions;
pub mod data;
pub mod models;

pub use data::{TeamData, TeamMemberData};
pub use models::team::Team;
pub use models::team_member::{TeamMember, TeamRole};
