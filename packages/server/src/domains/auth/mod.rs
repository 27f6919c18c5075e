//! Auth domain - session issuing/reading and credential verification.

pub mod actions;
pub mod password;
pub mod session;

pub use session::{Claims, SessionService, SESSION_COOKIE, SESSION_TTL_SECONDS};
