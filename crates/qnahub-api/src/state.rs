//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use qnahub_auth::JwtDecoder;
use qnahub_core::config::AppConfig;
use qnahub_service::QnaService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool (used by the health probe).
    pub db_pool: PgPool,
    /// Bearer token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Question/answer service.
    pub qna_service: Arc<QnaService>,
}
