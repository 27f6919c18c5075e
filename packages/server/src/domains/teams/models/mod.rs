pub mod team;
pub mod team_member;

pub use team::Team;
pub use team_member::{TeamMember, TeamRole};
