//! # Query Parameters
//!
//! Query string structures for the probe endpoints. Optional parameters carry
//! their documented defaults through `#[serde(default = ...)]`.

use serde::Deserialize;

/// Default redirect target for `GET /redirect`.
pub const DEFAULT_REDIRECT_URL: &str = "https://www.google.com";

/// Default fetch target for `GET /document/write`.
pub const DEFAULT_DOCUMENT_WRITE_URL: &str = "http://localhost";

/// Default client-side delay for `GET /sleep`, in seconds.
pub const DEFAULT_SLEEP_SECS: i64 = 10;

fn default_redirect_url() -> String {
    DEFAULT_REDIRECT_URL.to_string()
}

fn default_document_write_url() -> String {
    DEFAULT_DOCUMENT_WRITE_URL.to_string()
}

fn default_sleep_secs() -> i64 {
    DEFAULT_SLEEP_SECS
}

/// `GET /redirect?url=...`
#[derive(Debug, Clone, Deserialize)]
pub struct RedirectQuery {
    #[serde(default = "default_redirect_url")]
    pub url: String,
}

/// `GET /document/write?url=...`
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentWriteQuery {
    #[serde(default = "default_document_write_url")]
    pub url: String,
}

/// `GET /sleep?sec=...`
#[derive(Debug, Clone, Deserialize)]
pub struct SleepQuery {
    #[serde(default = "default_sleep_secs")]
    pub sec: i64,
}

/// `GET /html?content=...`
#[derive(Debug, Clone, Deserialize)]
pub struct HtmlQuery {
    pub content: String,
}

/// `GET /encode?data=...` and `GET /decode?data=...`
#[derive(Debug, Clone, Deserialize)]
pub struct DataQuery {
    pub data: String,
}
