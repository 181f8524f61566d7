//! # Data Transfer Objects (DTOs)
//!
//! Query parameter and response structures for the probe endpoints.

pub mod probe;
pub mod query;

pub use probe::*;
pub use query::*;
