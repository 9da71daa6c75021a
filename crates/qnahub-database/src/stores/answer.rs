//! Answer store implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use qnahub_core::error::{AppError, ErrorKind};
use qnahub_core::result::AppResult;
use qnahub_core::traits::AnswerStore;
use qnahub_entity::answer::{Answer, CreateAnswer};

/// Name of the partial unique index guaranteeing at most one accepted
/// answer per question.
const ACCEPTED_ONCE_INDEX: &str = "answers_one_accepted_per_question";

/// PostgreSQL-backed [`AnswerStore`].
#[derive(Debug, Clone)]
pub struct PgAnswerStore {
    pool: PgPool,
}

impl PgAnswerStore {
    /// Create a new answer store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnswerStore for PgAnswerStore {
    async fn create(&self, data: &CreateAnswer) -> AppResult<Answer> {
        sqlx::query_as::<_, Answer>(
            "INSERT INTO answers (question_id, answer_text, answered_by) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(data.question_id)
        .bind(&data.answer_text)
        .bind(data.answered_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create answer", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Answer>> {
        sqlx::query_as::<_, Answer>("SELECT * FROM answers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find answer", e))
    }

    async fn find_by_question(&self, question_id: Uuid) -> AppResult<Vec<Answer>> {
        sqlx::query_as::<_, Answer>(
            "SELECT * FROM answers WHERE question_id = $1 ORDER BY created_at ASC",
        )
        .bind(question_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list answers", e)
        })
    }

    async fn mark_accepted(&self, id: Uuid) -> AppResult<()> {
        // The partial unique index turns "accept a second answer" into a
        // constraint violation, so the check-and-set is atomic even under
        // concurrent accepts. Re-accepting the same answer stays a no-op.
        let result = sqlx::query("UPDATE answers SET is_accepted = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err)
                    if db_err.constraint() == Some(ACCEPTED_ONCE_INDEX) =>
                {
                    AppError::already_accepted(
                        "Another answer on this question is already accepted",
                    )
                }
                _ => AppError::with_source(ErrorKind::Database, "Failed to accept answer", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Answer {id} not found")));
        }
        Ok(())
    }
}
