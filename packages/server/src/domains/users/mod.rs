//! User domain - account records.
//!
//! Registration and login live in `domains::auth::actions`; this module owns
//! the persistence model and the API-facing data shape.

pub mod data;
pub mod models;

pub use data::UserData;
pub use models::user::User;
