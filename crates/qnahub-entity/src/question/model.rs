//! Question entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A question posted by a registered user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Question {
    /// Unique question identifier.
    pub id: Uuid,
    /// Short title.
    pub title: String,
    /// Full problem description.
    pub description: String,
    /// Optional category tag.
    pub category: Option<String>,
    /// Free-form tag labels; order is irrelevant.
    pub tags: Vec<String>,
    /// The user who asked the question. Sole authority for accepting an
    /// answer.
    pub asked_by: Uuid,
    /// Ordered, append-only list of answer ids posted against this question.
    pub answer_ids: Vec<Uuid>,
    /// When the question was created.
    pub created_at: DateTime<Utc>,
    /// When the question was last updated (answer appends only).
    pub updated_at: DateTime<Utc>,
}

impl Question {
    /// Whether `user_id` is the asker of this question.
    pub fn is_asked_by(&self, user_id: Uuid) -> bool {
        self.asked_by == user_id
    }
}

/// Data required to create a new question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateQuestion {
    /// Question title.
    pub title: String,
    /// Question description.
    pub description: String,
    /// Optional category.
    pub category: Option<String>,
    /// Tag labels.
    pub tags: Vec<String>,
    /// Asking user's id.
    pub asked_by: Uuid,
}
