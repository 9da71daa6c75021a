//! Read-side views of a question with identity references expanded.
//!
//! Expansion decorates stored id references with the referenced user's
//! display profile at read time. A profile that cannot be resolved is
//! omitted (`None`) rather than failing the whole read.

use serde::{Deserialize, Serialize};

use crate::answer::Answer;
use crate::user::UserProfile;

use super::model::Question;

/// A question in a listing, with the asker's profile expanded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSummary {
    /// The stored question record.
    pub question: Question,
    /// Display profile of the asker, if resolvable.
    pub asker: Option<UserProfile>,
}

/// A single question with asker and all linked answers expanded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionDetail {
    /// The stored question record.
    pub question: Question,
    /// Display profile of the asker, if resolvable.
    pub asker: Option<UserProfile>,
    /// Linked answers in the order they were posted, each with its
    /// author's profile expanded.
    pub answers: Vec<AnswerView>,
}

/// An answer with its author's profile expanded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerView {
    /// The stored answer record.
    pub answer: Answer,
    /// Display profile of the answerer, if resolvable.
    pub author: Option<UserProfile>,
}
