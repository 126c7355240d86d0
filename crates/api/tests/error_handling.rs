//! `AppError` → HTTP response mapping.
//!
//! Calls `IntoResponse` directly; no server or database involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use moguri_api::error::AppError;
use moguri_core::error::CoreError;
use moguri_core::pagination::PageRequest;

async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn client_errors_keep_their_message() {
    let cases = [
        (
            AppError::Core(CoreError::NotFound { entity: "Goal", id: 42 }),
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Goal with id 42 not found",
        ),
        (
            AppError::Core(CoreError::NotFoundByKey {
                entity: "GoalQuest",
                key: "travel".into(),
            }),
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "GoalQuest 'travel' not found",
        ),
        (
            AppError::Core(CoreError::Validation("limit must be between 1 and 100".into())),
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            "limit must be between 1 and 100",
        ),
        (
            AppError::Core(CoreError::Conflict("already played".into())),
            StatusCode::CONFLICT,
            "CONFLICT",
            "already played",
        ),
        (
            AppError::BadRequest("malformed body".into()),
            StatusCode::BAD_REQUEST,
            "BAD_REQUEST",
            "malformed body",
        ),
        (
            AppError::Database(sqlx::Error::RowNotFound),
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found",
        ),
    ];

    for (err, status, code, message) in cases {
        let (actual_status, json) = render(err).await;
        assert_eq!(actual_status, status, "{code}");
        assert_eq!(json["code"], code);
        assert_eq!(json["error"], message);
    }
}

#[tokio::test]
async fn server_errors_are_sanitized() {
    let cases = [
        AppError::InternalError("password for db is hunter2".into()),
        AppError::Core(CoreError::Internal("password for db is hunter2".into())),
        AppError::Database(sqlx::Error::PoolTimedOut),
    ];

    for err in cases {
        let (status, json) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["code"], "INTERNAL_ERROR");
        assert_eq!(json["error"], "An internal error occurred");
        assert!(!json.to_string().contains("hunter2"));
    }
}

#[tokio::test]
async fn pagination_violation_is_a_validation_error() {
    let core = PageRequest::new(-1, 101).validated().unwrap_err();

    let (status, json) = render(AppError::from(core)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("page") && message.contains("limit"), "{message}");
}

#[tokio::test]
async fn error_body_has_only_code_and_error() {
    let (_, json) = render(AppError::BadRequest("x".into())).await;
    let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys.len(), 2);
    assert!(keys.contains(&"code") && keys.contains(&"error"));
}
