//! Store traits implemented by the persistence layer.

pub mod store;

pub use store::{AnswerStore, QuestionStore, UserDirectory};
