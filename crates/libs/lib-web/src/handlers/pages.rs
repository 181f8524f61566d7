//! # Page Handlers
//!
//! HTML endpoints for script and markup injection tests. None of them do any
//! server-side waiting or fetching; everything happens in the browser.
//!
//! ## Endpoints
//!
//! - `GET /sleep?sec=...` - logs "before", then "after" `sec` seconds later
//! - `GET /html?content=...` - echoes `content` (plain or base64) as HTML
//! - `GET /document/write?url=...` - XHRs `url` and writes the body into the page

use crate::extract::ApiQuery;
use crate::response::ProbeResponse;
use crate::services::{pages, payload::resolve_payload};
use lib_core::dto::{DocumentWriteQuery, HtmlQuery, SleepQuery};
use tracing::{debug, info, instrument};

/// **Route**: `GET /sleep`
///
/// # Parameters
///
/// - `sec` (query, integer, default 10) - delay; magnitudes above 10 become 10
#[instrument(skip_all, fields(sec = params.sec))]
pub async fn sleep(ApiQuery(params): ApiQuery<SleepQuery>) -> ProbeResponse {
    let sec = pages::clamp_sleep_secs(params.sec);
    if sec != params.sec {
        debug!("[SLEEP] Clamped {} to {}", params.sec, sec);
    }
    info!("[SLEEP] Emitting {}s client-side timer", sec);
    ProbeResponse::html(pages::render_sleep_page(sec))
}

/// **Route**: `GET /html`
///
/// # Parameters
///
/// - `content` (query, required) - body, plain or base64
#[instrument(skip_all, fields(len = params.content.len()))]
pub async fn html(ApiQuery(params): ApiQuery<HtmlQuery>) -> ProbeResponse {
    let body = resolve_payload(&params.content);
    info!("[HTML] Serving {} bytes", body.len());
    ProbeResponse::html(body)
}

/// **Route**: `GET /document/write`
///
/// # Parameters
///
/// - `url` (query, default `http://localhost`) - XHR target, plain or base64
#[instrument(skip_all, fields(url = %params.url))]
pub async fn document_write(ApiQuery(params): ApiQuery<DocumentWriteQuery>) -> ProbeResponse {
    let url = resolve_payload(&params.url);
    info!("[DOCUMENT WRITE] Target {}", url);
    ProbeResponse::html(pages::render_document_write_page(&url))
}
