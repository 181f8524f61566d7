//! # Web Library
//!
//! HTTP handlers, middleware, response rendering and server startup for the
//! browser probe service.
//!
//! ## Endpoints
//!
//! ```bash
//! curl http://localhost:8000/
//! curl "http://localhost:8000/encode?data=hello"
//! curl "http://localhost:8000/decode?data=aGVsbG8="
//! curl -i "http://localhost:8000/redirect?url=https://example.com"
//! curl "http://localhost:8000/sleep?sec=3"
//! curl "http://localhost:8000/html?content=PGgxPlRlc3Q8L2gxPg=="
//! curl "http://localhost:8000/document/write?url=http://localhost:9000/"
//! ```

pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod server;
pub mod services;

pub use response::ProbeResponse;
pub use server::{create_router, start_server};
