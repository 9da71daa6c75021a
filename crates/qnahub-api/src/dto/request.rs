//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Create question request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    /// Question title.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Question description.
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    /// Optional category.
    pub category: Option<String>,
    /// Tag labels.
    pub tags: Option<Vec<String>>,
}

/// Post answer request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PostAnswerRequest {
    /// The answer body.
    #[validate(length(min = 1, message = "Answer text is required"))]
    pub answer_text: String,
}

/// Query parameters accepted by the question listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ListQuestionsQuery {
    /// Exact category match.
    pub category: Option<String>,
    /// Comma-separated tag list.
    pub tags: Option<String>,
}
