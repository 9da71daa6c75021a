//! User entity and public profile projection.

pub mod model;

pub use model::{User, UserProfile};
