//! Answer entity.

pub mod model;

pub use model::{Answer, CreateAnswer};
