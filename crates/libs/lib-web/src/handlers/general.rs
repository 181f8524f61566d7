//! # General Handlers
//!
//! Static endpoints used to check that the service is reachable.

use crate::response::ProbeResponse;
use lib_core::{dto::MessageResponse, AppError, Result};
use axum::http::Uri;
use tracing::{debug, info};

/// **Route**: `GET /`
pub async fn root() -> Result<ProbeResponse> {
    debug!("[ROOT] Hello");
    ProbeResponse::json(&MessageResponse::new("Hello World"))
}

/// **Route**: `GET /log`
///
/// Always answers `{"message": "OK"}`; useful as a beacon target whose
/// requests show up in the access log.
pub async fn log() -> Result<ProbeResponse> {
    info!("[LOG] Beacon received");
    ProbeResponse::json(&MessageResponse::new("OK"))
}

/// **Route**: `GET /health`
pub async fn health() -> &'static str {
    "OK"
}

/// Fallback for unmatched routes.
pub async fn not_found(uri: Uri) -> AppError {
    info!("[404 HANDLER] Unmatched route {} - returning 404", uri);
    AppError::NotFound
}
