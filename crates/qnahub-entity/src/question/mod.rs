//! Question entity and its expanded views.

pub mod model;
pub mod view;

pub use model::{CreateQuestion, Question};
pub use view::{QuestionDetail, QuestionSummary};
