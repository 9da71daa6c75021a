//! Storage interface consumed by the service layer.
//!
//! The service depends only on these traits; `qnahub-database` provides the
//! PostgreSQL implementations. Stores return raw records — relational
//! expansion (joining asker and answerer profiles into responses) is a
//! read-side composition step performed by the service.

use async_trait::async_trait;
use uuid::Uuid;

use qnahub_entity::answer::{Answer, CreateAnswer};
use qnahub_entity::question::{CreateQuestion, Question};
use qnahub_entity::user::UserProfile;

use crate::result::AppResult;
use crate::types::QuestionFilter;

/// Persistence operations for [`Question`] records.
#[async_trait]
pub trait QuestionStore: Send + Sync + 'static {
    /// Persist a new question with a fresh id and an empty answer list.
    async fn create(&self, data: &CreateQuestion) -> AppResult<Question>;

    /// Find all questions matching the filter. An empty result is a valid
    /// outcome, not an error.
    async fn find(&self, filter: &QuestionFilter) -> AppResult<Vec<Question>>;

    /// Find a question by its primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Question>>;

    /// Atomically append an answer id to the question's answer list.
    ///
    /// Fails with `NotFound` if the question does not exist. The append is
    /// a single-row atomic update, so concurrent appends on the same
    /// question cannot lose an id to a lost update.
    async fn append_answer(&self, question_id: Uuid, answer_id: Uuid) -> AppResult<()>;
}

/// Persistence operations for [`Answer`] records.
#[async_trait]
pub trait AnswerStore: Send + Sync + 'static {
    /// Persist a new answer with `is_accepted = false`.
    async fn create(&self, data: &CreateAnswer) -> AppResult<Answer>;

    /// Find an answer by its primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Answer>>;

    /// All answers recorded against a question, oldest first.
    async fn find_by_question(&self, question_id: Uuid) -> AppResult<Vec<Answer>>;

    /// Set `is_accepted = true` on the answer.
    ///
    /// Idempotent for the same answer: calling twice leaves it true.
    /// Accepting a second answer on a question that already has an accepted
    /// one fails with `AlreadyAccepted` — the implementation must make this
    /// a compare-and-set, not a read-modify-write, so two concurrent callers
    /// cannot both succeed on different answers.
    async fn mark_accepted(&self, id: Uuid) -> AppResult<()>;
}

/// Read-only directory of user display profiles.
///
/// Identity verification happens outside this service; the directory is
/// consumed only to decorate responses with `{name, email}`.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Resolve an identity reference to its display profile, if known.
    async fn resolve(&self, id: Uuid) -> AppResult<Option<UserProfile>>;
}
