//! Answer entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An answer posted against a question.
///
/// Every answer belongs to exactly one question. The only mutable field is
/// `is_accepted`, which transitions false → true at most once and never
/// reverts.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Answer {
    /// Unique answer identifier.
    pub id: Uuid,
    /// The parent question.
    pub question_id: Uuid,
    /// The answer body.
    pub answer_text: String,
    /// The user who posted the answer.
    pub answered_by: Uuid,
    /// Whether the asker has marked this answer as accepted.
    pub is_accepted: bool,
    /// When the answer was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAnswer {
    /// The question being answered.
    pub question_id: Uuid,
    /// The answer body.
    pub answer_text: String,
    /// The answering user's id.
    pub answered_by: Uuid,
}
