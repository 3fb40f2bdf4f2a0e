//! Unit tests for ServerError responses

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use serde_json::Value;
use yamlgen_llm::LLMError;
use yamlgen_server::error::{sanitize_detail, ServerError};

async fn body_of(err: ServerError) -> (StatusCode, Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_invalid_request_body() {
    let (status, body) = body_of(ServerError::InvalidRequest("Prompt is required".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Prompt is required");
    assert_eq!(body["status"], 400);
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_unauthorized_and_forbidden_bodies() {
    let (status, body) = body_of(ServerError::Unauthorized("Authentication token required".into())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Authentication token required");

    let (status, body) = body_of(ServerError::Forbidden("Invalid or expired token".into())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Invalid or expired token");
}

#[tokio::test]
async fn test_upstream_body_carries_sanitized_error() {
    let err: ServerError =
        LLMError::ApiCallFailed("Gemini API error (400): API key AIzaSyBadKey0123456789 not valid".into()).into();
    let (status, body) = body_of(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Error generating YAML");
    let detail = body["error"].as_str().unwrap();
    assert!(detail.contains("not valid"));
    assert!(!detail.contains("AIzaSyBadKey0123456789"));
}

#[tokio::test]
async fn test_internal_error_hides_detail() {
    let (status, body) = body_of(ServerError::InternalError("lock poisoned at store.rs".into())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal server error");
    assert!(!body.to_string().contains("store.rs"));
}

#[test]
fn test_sanitize_is_idempotent() {
    let once = sanitize_detail("url?key=secret123&x=1\nBearer abc");
    assert_eq!(sanitize_detail(&once), once);
}
