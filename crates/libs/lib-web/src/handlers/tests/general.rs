//! # General Endpoint Tests

use super::*;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_root() {
    // Act
    let response = get("/").await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "application/json");
    assert_eq!(body_json(response).await, json!({"message": "Hello World"}));
}

#[tokio::test]
async fn test_log() {
    let response = get("/log").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"message": "OK"}));
}

#[tokio::test]
async fn test_log_ignores_query() {
    let response = get("/log?event=click&x=1").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"message": "OK"}));
}

#[tokio::test]
async fn test_health() {
    let response = get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "OK");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let response = get("/does/not/exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"detail": "Not Found"}));
}

#[tokio::test]
async fn test_request_id_header() {
    let response = get("/").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert_eq!(request_id.len(), 36);
}

#[tokio::test]
async fn test_root_body_text() {
    let response = get("/").await;

    assert_eq!(body_text(response).await, r#"{"message":"Hello World"}"#);
}
