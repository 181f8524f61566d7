//! # Application Configuration
//!
//! Server configuration loaded from environment variables (a `.env` file is
//! honoured by the binary through `dotenvy`). Every value has a default so the
//! service starts with no environment at all.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `BIND_ADDRESS` | `127.0.0.1:8000` | Socket address to listen on |
//! | `LOG_LEVEL` | `info` | trace, debug, info, warn or error |
//! | `ALLOWED_ORIGINS` | *(unset)* | Comma-separated CORS origins; unset allows any origin |

use crate::error::{AppError, Result};
use lib_utils::envs::{self, get_env_or, get_env_parse};
use std::net::SocketAddr;

/// Default listen address.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8000";

/// Default tracing level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// Address the HTTP listener binds to
    pub bind_address: SocketAddr,

    /// Tracing filter level, lowercase
    pub log_level: String,

    /// CORS origins allowed to call the probes
    ///
    /// Empty means any origin is allowed.
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 8000)),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            allowed_origins: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let bind_address = resolve_bind_address(get_env_parse::<SocketAddr>("BIND_ADDRESS"))?;
        let log_level = get_env_or("LOG_LEVEL", DEFAULT_LOG_LEVEL).to_lowercase();
        let allowed_origins = parse_origins(&get_env_or("ALLOWED_ORIGINS", ""));

        Ok(Self {
            bind_address,
            log_level,
            allowed_origins,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(AppError::Config(format!(
                "LOG_LEVEL must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        if let Some(origin) = self.allowed_origins.iter().find(|o| !o.starts_with("http")) {
            return Err(AppError::Config(format!(
                "ALLOWED_ORIGINS entry '{}' must be an http(s) origin",
                origin
            )));
        }

        Ok(())
    }
}

/// Fall back to the default address when unset; reject unparsable values.
fn resolve_bind_address(parsed: std::result::Result<SocketAddr, envs::Error>) -> Result<SocketAddr> {
    match parsed {
        Ok(addr) => Ok(addr),
        Err(envs::Error::MissingEnv(_)) => DEFAULT_BIND_ADDRESS
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid default bind address: {}", e))),
        Err(envs::Error::WrongFormat(name)) => Err(AppError::Config(format!(
            "{} must be a socket address such as 127.0.0.1:8000",
            name
        ))),
    }
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

// endregion: --- Tests
