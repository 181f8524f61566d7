//! # HTTP Request Handlers
//!
//! One handler per probe route. Every handler is stateless: it reads its
//! query parameters, calls into [`crate::services`], and returns a
//! [`ProbeResponse`](crate::response::ProbeResponse).
//!
//! ## Handler Modules
//!
//! - **[`general`]**: liveness and fallback
//!   - `GET /` - `{"message": "Hello World"}`
//!   - `GET /log` - `{"message": "OK"}`
//!   - `GET /health` - plain `OK`
//!
//! - **[`codec`]**: base64 round trips
//!   - `GET /encode?data=...` - encode text
//!   - `GET /decode?data=...` - strictly decode to text, 400 on bad input
//!
//! - **[`redirect`]**: redirect following
//!   - `GET /redirect?url=...` - 302 to `url` (base64 accepted)
//!
//! - **[`pages`]**: HTML and script injection
//!   - `GET /sleep?sec=...` - client-side timer page
//!   - `GET /html?content=...` - raw HTML body (base64 accepted)
//!   - `GET /document/write?url=...` - XHR + `document.write` page
//!
//! ## Error Handling
//!
//! Handlers that can fail return `lib_core::Result<ProbeResponse>`. Query
//! problems never reach a handler: [`ApiQuery`](crate::extract::ApiQuery)
//! rejects them with `422` first.
//!
//! ## Testing Handlers
//!
//! See `tests/`: requests go through the full router with
//! `tower::ServiceExt::oneshot`.

pub mod codec;
pub mod general;
pub mod pages;
pub mod redirect;

#[cfg(test)]
mod tests;
