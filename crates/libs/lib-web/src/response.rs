//! # Probe Responses
//!
//! Every probe handler returns a [`ProbeResponse`]: a JSON body, an HTML
//! document or a redirect. The variant is turned into an HTTP response here so
//! handlers never touch headers or status codes directly.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use lib_core::AppError;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;
use serde_json::Value;

/// Characters escaped in a `Location` header.
///
/// Alphanumerics, `-._~` and `:/%#?=@[]!$&'()*+,;` pass through untouched,
/// so already-encoded URLs are left as they are.
const LOCATION_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Response produced by a probe handler.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeResponse {
    /// `200 OK` with an `application/json` body
    Json(Value),
    /// `200 OK` with a `text/html; charset=utf-8` body
    Html(String),
    /// `302 Found` pointing at the target
    Redirect(String),
}

impl ProbeResponse {
    /// Serialize a DTO into a JSON response.
    pub fn json<T: Serialize>(body: &T) -> lib_core::Result<Self> {
        Ok(Self::Json(serde_json::to_value(body)?))
    }

    pub fn html(body: impl Into<String>) -> Self {
        Self::Html(body.into())
    }

    pub fn redirect(target: impl Into<String>) -> Self {
        Self::Redirect(target.into())
    }
}

/// Percent-encode a redirect target so it is always a valid header value.
pub fn encode_location(target: &str) -> String {
    utf8_percent_encode(target, LOCATION_ENCODE_SET).to_string()
}

impl IntoResponse for ProbeResponse {
    fn into_response(self) -> Response {
        match self {
            ProbeResponse::Json(body) => (StatusCode::OK, Json(body)).into_response(),
            ProbeResponse::Html(body) => (StatusCode::OK, Html(body)).into_response(),
            ProbeResponse::Redirect(target) => {
                match HeaderValue::from_str(&encode_location(&target)) {
                    Ok(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
                    Err(e) => AppError::Internal(format!("Unusable redirect target: {}", e)).into_response(),
                }
            }
        }
    }
}

// endregion: --- Tests
