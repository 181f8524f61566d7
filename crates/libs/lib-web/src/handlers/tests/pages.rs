//! # HTML Page Endpoint Tests

use super::*;
use axum::http::StatusCode;

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

#[tokio::test]
async fn test_html_plain_text() {
    // Act
    let response = get("/html?content=Hello,%20World!").await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), HTML_CONTENT_TYPE);
    assert_eq!(body_text(response).await, "Hello, World!");
}

#[tokio::test]
async fn test_html_base64_encoded() {
    let response = get("/html?content=PGgxPlRlc3Q8L2gxPg==").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), HTML_CONTENT_TYPE);
    assert_eq!(body_text(response).await, "<h1>Test</h1>");
}

#[tokio::test]
async fn test_html_longer_base64() {
    let response = get("/html?content=PGgxPlRoaXMgaXMgYSB0ZXN0PC9oMT4=").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "<h1>This is a test</h1>");
}

#[tokio::test]
async fn test_html_empty_content() {
    let response = get("/html?content=").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "");
}

#[tokio::test]
async fn test_html_non_utf8_base64_is_verbatim() {
    let response = get("/html?content=//79").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "//79");
}

#[tokio::test]
async fn test_html_missing_content_is_422() {
    let response = get("/html").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_sleep_default() {
    let response = get("/sleep").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), HTML_CONTENT_TYPE);
    assert_eq!(
        body_text(response).await,
        "<!DOCTYPE html><head></head><body><script>\n\
         console.log(\"before\");\n\
         setTimeout(() => console.log(\"after\"), 10000);\n\
         </script></body></html>"
    );
}

#[tokio::test]
async fn test_sleep_is_clamped() {
    let response = get("/sleep?sec=15").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response)
        .await
        .contains("setTimeout(() => console.log(\"after\"), 10000);"));
}

#[tokio::test]
async fn test_sleep_large_negative_is_clamped_positive() {
    let response = get("/sleep?sec=-30").await;

    assert!(body_text(response).await.contains(", 10000);"));
}

#[tokio::test]
async fn test_sleep_negative_keeps_sign() {
    let response = get("/sleep?sec=-5").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains(", -5000);"));
}

#[tokio::test]
async fn test_sleep_non_integer_is_422() {
    let response = get("/sleep?sec=soon").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_document_write_default() {
    let response = get("/document/write").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), HTML_CONTENT_TYPE);
    let body = body_text(response).await;
    assert!(body.starts_with("<!DOCTYPE html><head></head><body><script>\nvar t = new XMLHttpRequest;\n"));
    assert!(body.contains("t.open(\"GET\", \"http://localhost\");\nt.send();\n"));
    assert!(body.ends_with("</script></body></html>"));
}

#[tokio::test]
async fn test_document_write_plain_url() {
    let response = get("/document/write?url=http%3A%2F%2F127.0.0.1%3A9000%2Fprobe").await;

    assert!(body_text(response)
        .await
        .contains("t.open(\"GET\", \"http://127.0.0.1:9000/probe\");"));
}

#[tokio::test]
async fn test_document_write_base64_url() {
    let response = get("/document/write?url=aHR0cDovLzEyNy4wLjAuMTo5MDAwL3Byb2Jl").await;

    assert!(body_text(response)
        .await
        .contains("t.open(\"GET\", \"http://127.0.0.1:9000/probe\");"));
}

#[tokio::test]
async fn test_html_base64_with_trailing_bits_is_decoded() {
    let response = get("/html?content=YR==").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "a");
}
