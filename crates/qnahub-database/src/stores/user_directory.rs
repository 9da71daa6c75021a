//! User directory implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use qnahub_core::error::{AppError, ErrorKind};
use qnahub_core::result::AppResult;
use qnahub_core::traits::UserDirectory;
use qnahub_entity::user::{User, UserProfile};

/// PostgreSQL-backed [`UserDirectory`].
///
/// Only the public profile projection leaves this store; other user
/// columns never reach a response.
#[derive(Debug, Clone)]
pub struct PgUserDirectory {
    pool: PgPool,
}

impl PgUserDirectory {
    /// Create a new user directory.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for PgUserDirectory {
    async fn resolve(&self, id: Uuid) -> AppResult<Option<UserProfile>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map(|user| user.map(|u| u.profile()))
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to resolve user", e))
    }
}
