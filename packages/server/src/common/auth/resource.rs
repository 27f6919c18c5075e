use crate::common::{AgentId, TeamId, WorkspaceId};

/// A resource (or resource scope) an actor wants access to.
///
/// Only compound checks live here - message access resolves through the
/// parent `Agent`, team visibility combines creatorship and membership, and
/// `WorkspaceAgents` models the workspace-scoped agent listing. By-id CRUD
/// on a single owned row embeds its ownership check in the query instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// An agent, addressed by id. Guards the agent itself and, transitively,
    /// its messages.
    Agent(AgentId),

    /// The set of agents inside a workspace. Readable by any authenticated
    /// actor who supplies the workspace id; the trust boundary is the
    /// workspace id itself.
    WorkspaceAgents(WorkspaceId),

    /// A team. Readable by its creator or any member; mutable by its
    /// creator only.
    Team(TeamId),
}

/// What the actor intends to do with the resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Read,
    Mutate,
}
