//! # Core Library
//!
//! Configuration, error type and response DTOs shared by the web layer.

pub mod config;
pub mod error;
pub mod dto;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
