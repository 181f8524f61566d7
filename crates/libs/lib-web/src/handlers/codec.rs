//! # Codec Handlers
//!
//! ## Endpoints
//!
//! - `GET /encode?data=...` - standard padded base64 of `data`
//! - `GET /decode?data=...` - strict decode of `data` to UTF-8 text
//!
//! ## Request Examples
//!
//! ```bash
//! curl "http://localhost:8000/encode?data=Encode%20This%20String"
//! # {"original":"Encode This String","encoded":"RW5jb2RlIFRoaXMgU3RyaW5n"}
//!
//! curl "http://localhost:8000/decode?data=RW5jb2RlIFRoaXMgU3RyaW5n"
//! # {"original_b64":"RW5jb2RlIFRoaXMgU3RyaW5n","decoded":"Encode This String"}
//!
//! curl "http://localhost:8000/decode?data=dGVzdA"
//! # 400 {"detail":"Invalid Base64 data"}
//! ```
//!
//! A literal `+` in a query string arrives as a space, so base64 containing
//! `+` has to be sent as `%2B`.

use crate::extract::ApiQuery;
use crate::response::ProbeResponse;
use crate::services;
use lib_core::{dto::DataQuery, Result};
use tracing::{info, instrument, warn};

/// **Route**: `GET /encode`
#[instrument(skip_all, fields(len = params.data.len()))]
pub async fn encode(ApiQuery(params): ApiQuery<DataQuery>) -> Result<ProbeResponse> {
    let response = services::codec::encode(params.data);
    info!("[ENCODE] {} -> {} chars", response.original.len(), response.encoded.len());
    ProbeResponse::json(&response)
}

/// **Route**: `GET /decode`
///
/// Error (400): `{"detail": "Invalid Base64 data"}` when `data` is not strict
/// base64 or does not decode to UTF-8.
#[instrument(skip_all, fields(len = params.data.len()))]
pub async fn decode(ApiQuery(params): ApiQuery<DataQuery>) -> Result<ProbeResponse> {
    let response = services::codec::decode(params.data).inspect_err(|e| {
        warn!("[DECODE] {}", e);
    })?;
    info!("[DECODE] {} chars -> {} bytes", response.original_b64.len(), response.decoded.len());
    ProbeResponse::json(&response)
}
