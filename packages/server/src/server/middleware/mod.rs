pub mod identity;
pub mod route_guard;

pub use identity::identity_middleware;
pub use route_guard::{page_route_guard, redirect_authenticated_away_from, requires_auth};
