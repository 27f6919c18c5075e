//! Auth domain actions - registration, login, and session queries.

mod login;
mod queries;
mod register;

pub use login::{login, LoginInput, LoginOutcome};
pub use queries::current_user;
pub use register::{register, RegisterInput};
