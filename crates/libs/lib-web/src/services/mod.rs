//! # Services Layer
//!
//! Pure transformations behind the probe handlers. Handlers parse the query
//! string and pick a response variant; everything else lives here.
//!
//! ```text
//! Handlers (HTTP) → Services (payload / codec / pages) → lib-utils::b64
//! ```
//!
//! ## Module Organization
//!
//! - [`payload`] - Resolve a query value that may be base64-encoded
//! - [`codec`] - Encode/decode DTOs for `/encode` and `/decode`
//! - [`pages`] - HTML templates for `/sleep` and `/document/write`
//!
//! None of the services hold state, so they are free functions rather than
//! structs.

pub mod codec;
pub mod pages;
pub mod payload;
