//! Route definitions for the QnAHub HTTP API.
//!
//! Domain routes are mounted under `/api/v1`; the health probe lives at the
//! root. The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::Router;
use axum::routing::{get, patch, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", qna_routes())
        .route("/health", get(handlers::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Question/answer endpoints.
fn qna_routes() -> Router<AppState> {
    Router::new()
        .route("/qna", get(handlers::qna::list_questions))
        .route("/qna", post(handlers::qna::create_question))
        .route("/qna/{id}", get(handlers::qna::get_question))
        .route("/qna/{id}/answers", post(handlers::qna::post_answer))
        .route(
            "/qna/{question_id}/answers/{answer_id}/accept",
            patch(handlers::qna::accept_answer),
        )
}
