//! Acceptance authorization rule.

use uuid::Uuid;

use qnahub_core::error::AppError;
use qnahub_core::result::AppResult;
use qnahub_entity::question::Question;

/// Stateless evaluator of the answer-acceptance rule.
///
/// Accepting an answer is a privilege of question ownership, not answer
/// ownership. The guard never touches a store, so the rule can be tested
/// without any persistence dependency.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptGuard;

impl AcceptGuard {
    /// Creates a new guard.
    pub fn new() -> Self {
        Self
    }

    /// Whether `caller_id` may accept an answer on `question`.
    pub fn can_accept(&self, question: &Question, caller_id: Uuid) -> bool {
        question.is_asked_by(caller_id)
    }

    /// Errors with `Authorization` unless the caller is the asker.
    pub fn require_accept(&self, question: &Question, caller_id: Uuid) -> AppResult<()> {
        if self.can_accept(question, caller_id) {
            Ok(())
        } else {
            Err(AppError::authorization(
                "Only the question asker can accept an answer",
            ))
        }
    }
}
