//! # Probe Response DTOs
//!
//! JSON bodies returned by the probe endpoints.
//!
//! ## Endpoints Using These DTOs
//!
//! - `GET /` and `GET /log` -> [`MessageResponse`]
//! - `GET /encode?data=...` -> [`EncodeResponse`]
//! - `GET /decode?data=...` -> [`DecodeResponse`], or [`ErrorResponse`] on bad input
//!
//! ## Wire Format
//!
//! Field names are **snake_case** (default serde behavior).
//!
//! ```text
//! GET /encode?data=Encode%20This%20String
//!
//! {
//!   "original": "Encode This String",
//!   "encoded": "RW5jb2RlIFRoaXMgU3RyaW5n"
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Plain status message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Result of `GET /encode`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EncodeResponse {
    /// Input exactly as received
    pub original: String,
    /// Standard padded base64 of the input's UTF-8 bytes
    pub encoded: String,
}

/// Result of `GET /decode`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecodeResponse {
    /// Base64 input exactly as received
    pub original_b64: String,
    pub decoded: String,
}

/// Error body shared by every failing request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub detail: String,
}
