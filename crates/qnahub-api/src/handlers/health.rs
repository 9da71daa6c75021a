//! Health probe handler.

use axum::Json;
use axum::extract::State;

use crate::state::AppState;

/// GET /health — liveness plus database connectivity.
pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let database = qnahub_database::connection::health_check(&state.db_pool)
        .await
        .unwrap_or(false);

    Json(serde_json::json!({ "status": "ok", "database": database }))
}
