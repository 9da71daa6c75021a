//! Concrete PostgreSQL store implementations.

pub mod answer;
pub mod question;
pub mod user_directory;

pub use answer::PgAnswerStore;
pub use question::PgQuestionStore;
pub use user_directory::PgUserDirectory;
