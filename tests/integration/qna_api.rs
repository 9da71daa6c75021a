//! Request-plumbing tests: auth enforcement, body validation, routing,
//! and error shaping. None of these reach the database.

use http::StatusCode;
use uuid::Uuid;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_question_requires_auth() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/v1/qna",
            Some(serde_json::json!({
                "title": "Q1",
                "description": "D1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body.get("error").unwrap().as_str().unwrap(),
        "UNAUTHORIZED"
    );
}

#[tokio::test]
async fn test_tampered_token_is_rejected() {
    let app = TestApp::new();
    let token = app.token_for(Uuid::new_v4(), "User");

    let response = app
        .request(
            "POST",
            "/api/v1/qna",
            Some(serde_json::json!({ "title": "Q1", "description": "D1" })),
            Some(&format!("{token}x")),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = TestApp::new();
    let token = app.expired_token(Uuid::new_v4());

    let response = app
        .request(
            "POST",
            "/api/v1/qna",
            Some(serde_json::json!({ "title": "Q1", "description": "D1" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_question_rejects_blank_title() {
    let app = TestApp::new();
    let token = app.token_for(Uuid::new_v4(), "User");

    let response = app
        .request(
            "POST",
            "/api/v1/qna",
            Some(serde_json::json!({ "title": "", "description": "D1" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body.get("error").unwrap().as_str().unwrap(),
        "VALIDATION_ERROR"
    );
}

#[tokio::test]
async fn test_post_answer_rejects_blank_text() {
    let app = TestApp::new();
    let token = app.token_for(Uuid::new_v4(), "User");

    let response = app
        .request(
            "POST",
            &format!("/api/v1/qna/{}/answers", Uuid::new_v4()),
            Some(serde_json::json!({ "answer_text": "" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_accept_answer_requires_auth() {
    let app = TestApp::new();

    let response = app
        .request(
            "PATCH",
            &format!(
                "/api/v1/qna/{}/answers/{}/accept",
                Uuid::new_v4(),
                Uuid::new_v4()
            ),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_invalid_question_id_in_path() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/v1/qna/not-a-uuid", None, None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/v1/nope", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
