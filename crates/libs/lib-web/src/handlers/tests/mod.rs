//! # Probe Handler Tests
//!
//! Requests are sent through the full router (middleware included) with
//! `tower::ServiceExt::oneshot`.

mod general;
mod pages;

use crate::server::create_router;
use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use lib_core::Config;
use tower::ServiceExt;

/// Create test app with the production routes and default config
pub fn test_app() -> Router {
    create_router(&Config::default())
}

/// Send a `GET` for `uri` to a fresh app
pub async fn get(uri: &str) -> Response<Body> {
    test_app()
        .oneshot(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Read the whole body as UTF-8
pub async fn body_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

/// Read the whole body as JSON
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Content type of a response
pub fn content_type(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}
