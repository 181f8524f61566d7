//! # Redirect Handler
//!
//! `GET /redirect?url=...` answers `302 Found` so clients can be checked for
//! how they follow redirects. `url` may be sent plain or as base64, which
//! avoids double-encoding nested query strings.
//!
//! ```bash
//! curl -i "http://localhost:8000/redirect?url=aHR0cHM6Ly9leGFtcGxlLmNvbS9wYXRo"
//! # HTTP/1.1 302 Found
//! # location: https://example.com/path
//! ```

use crate::extract::ApiQuery;
use crate::response::ProbeResponse;
use crate::services::payload::resolve_payload;
use lib_core::dto::RedirectQuery;
use tracing::{info, instrument};

/// **Route**: `GET /redirect`
///
/// # Parameters
///
/// - `url` (query, default `https://www.google.com`) - target, plain or base64
#[instrument(skip_all, fields(url = %params.url))]
pub async fn redirect(ApiQuery(params): ApiQuery<RedirectQuery>) -> ProbeResponse {
    let target = resolve_payload(&params.url);
    info!("[REDIRECT] -> {}", target);
    ProbeResponse::redirect(target)
}
