//! Team domain actions.

mod create_team;
mod delete_team;
mod members;
mod queries;
mod update_team;

pub use create_team::{create_team, CreateTeamInput};
pub use delete_team::delete_team;
pub use members::{add_member, list_members, AddMemberInput};
pub use queries::{get_team, visible_teams};
pub use update_team::{update_team, UpdateTeamInput};
