//! Question and answer handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use qnahub_core::error::AppError;
use qnahub_core::types::QuestionFilter;
use qnahub_entity::answer::Answer;
use qnahub_entity::question::{Question, QuestionDetail, QuestionSummary};
use qnahub_service::qna::{CreateQuestionInput, PostAnswerInput};

use crate::dto::request::{CreateQuestionRequest, ListQuestionsQuery, PostAnswerRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/v1/qna
pub async fn list_questions(
    State(state): State<AppState>,
    Query(params): Query<ListQuestionsQuery>,
) -> Result<Json<ApiResponse<Vec<QuestionSummary>>>, ApiError> {
    let filter =
        QuestionFilter::from_query_parts(params.category.as_deref(), params.tags.as_deref());

    let questions = state.qna_service.list_questions(&filter).await?;
    Ok(Json(ApiResponse::ok(questions)))
}

/// POST /api/v1/qna
pub async fn create_question(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateQuestionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Question>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let question = state
        .qna_service
        .create_question(
            &auth,
            CreateQuestionInput {
                title: req.title,
                description: req.description,
                category: req.category,
                tags: req.tags.unwrap_or_default(),
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(question))))
}

/// GET /api/v1/qna/{id}
pub async fn get_question(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<QuestionDetail>>, ApiError> {
    let detail = state.qna_service.get_question(id).await?;
    Ok(Json(ApiResponse::ok(detail)))
}

/// POST /api/v1/qna/{id}/answers
pub async fn post_answer(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<PostAnswerRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Answer>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let answer = state
        .qna_service
        .post_answer(
            &auth,
            id,
            PostAnswerInput {
                answer_text: req.answer_text,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(answer))))
}

/// PATCH /api/v1/qna/{question_id}/answers/{answer_id}/accept
pub async fn accept_answer(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((question_id, answer_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<Answer>>, ApiError> {
    let answer = state
        .qna_service
        .accept_answer(&auth, question_id, answer_id)
        .await?;

    Ok(Json(ApiResponse::ok(answer)))
}
