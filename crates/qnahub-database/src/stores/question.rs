//! Question store implementation.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use qnahub_core::error::{AppError, ErrorKind};
use qnahub_core::result::AppResult;
use qnahub_core::traits::QuestionStore;
use qnahub_core::types::QuestionFilter;
use qnahub_entity::question::{CreateQuestion, Question};

/// PostgreSQL-backed [`QuestionStore`].
#[derive(Debug, Clone)]
pub struct PgQuestionStore {
    pool: PgPool,
}

impl PgQuestionStore {
    /// Create a new question store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionStore for PgQuestionStore {
    async fn create(&self, data: &CreateQuestion) -> AppResult<Question> {
        sqlx::query_as::<_, Question>(
            "INSERT INTO questions (title, description, category, tags, asked_by) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.category)
        .bind(&data.tags)
        .bind(data.asked_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create question", e))
    }

    async fn find(&self, filter: &QuestionFilter) -> AppResult<Vec<Question>> {
        let mut query: QueryBuilder<Postgres> = QueryBuilder::new("SELECT * FROM questions");

        let mut separator = " WHERE ";
        if let Some(category) = &filter.category {
            query.push(separator).push("category = ");
            query.push_bind(category.clone());
            separator = " AND ";
        }
        if !filter.tags.is_empty() {
            query.push(separator).push("tags && ");
            query.push_bind(filter.tags.clone());
        }
        query.push(" ORDER BY created_at DESC");

        query
            .build_query_as::<Question>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list questions", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Question>> {
        sqlx::query_as::<_, Question>("SELECT * FROM questions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find question", e))
    }

    async fn append_answer(&self, question_id: Uuid, answer_id: Uuid) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE questions \
             SET answer_ids = array_append(answer_ids, $2), updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(question_id)
        .bind(answer_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to link answer", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "Question {question_id} not found"
            )));
        }
        Ok(())
    }
}
