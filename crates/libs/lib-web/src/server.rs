//! # Server Setup
//!
//! Tracing initialization, route registration, and HTTP server startup.
//!
//! The router holds no state: every probe handler is a pure function of its
//! query string, so requests are served concurrently without coordination.

// region: --- Imports
use axum::{http::Method, routing::get, Router};
use lib_core::Config;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::handlers;
use crate::middleware::{log_requests, stamp_req, RequestStamp};
// endregion: --- Imports

// region: --- Tracing
/// Install the global `tracing` subscriber for `config.log_level`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(config.log_level.as_str());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_file(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global tracing subscriber: {}", e))
}
// endregion: --- Tracing

// region: --- Server Setup
/// Initialize tracing, bind the listener and serve until the process exits.
///
/// # Errors
///
/// This function will return an error if:
/// - Configuration validation fails
/// - The tracing subscriber cannot be installed
/// - The bind address is unavailable
pub async fn start_server(config: Config) -> anyhow::Result<()> {
    config.validate()?;
    init_tracing(&config)?;

    info!("BROWSER PROBE STARTING");
    info!("Log level: {}", config.log_level);

    let app = create_router(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    info!("SERVER READY: http://{}", config.bind_address);
    log_server_info();

    axum::serve(listener, app).await?;
    Ok(())
}

/// Create the application router with all probe routes and middleware.
pub fn create_router(config: &Config) -> Router {
    info!("[ROUTE SETUP] Registering HTTP routes...");
    Router::new()
        .route("/", get(handlers::general::root))
        .route("/log", get(handlers::general::log))
        .route("/health", get(handlers::general::health))
        .route("/redirect", get(handlers::redirect::redirect))
        .route("/sleep", get(handlers::pages::sleep))
        .route("/html", get(handlers::pages::html))
        .route("/encode", get(handlers::codec::encode))
        .route("/decode", get(handlers::codec::decode))
        .route("/document/write", get(handlers::pages::document_write))
        .fallback(handlers::general::not_found)
        // Access log, innermost so it sees the final status
        .layer(axum::middleware::from_fn(log_requests))
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    let request_id = request
                        .extensions()
                        .get::<RequestStamp>()
                        .map(|s| s.id.clone())
                        .unwrap_or_else(|| "unknown".to_string());
                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_failure(|error: tower_http::classify::ServerErrorsFailureClass, latency: Duration, _span: &tracing::Span| {
                    tracing::error!(
                        error = ?error,
                        latency_ms = latency.as_millis(),
                        "[HTTP FAILURE] Error: {:?}, Latency: {}ms",
                        error,
                        latency.as_millis()
                    );
                }),
        )
        // Request stamping, outside the span and the access log so both see the ID
        .layer(axum::middleware::from_fn(stamp_req))
        .layer(cors_layer(&config.allowed_origins))
}

/// CORS for the probes: configured origins, or any origin when none are set.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    if allowed_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<axum::http::HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    cors.allow_origin(origins)
}

/// Log the route catalogue
fn log_server_info() {
    info!(" GENERAL:");
    info!("   • GET  /");
    info!("   • GET  /log");
    info!("   • GET  /health");
    info!(" BASE64:");
    info!("   • GET  /encode?data={{text}}");
    info!("   • GET  /decode?data={{base64}}");
    info!(" BROWSER PROBES:");
    info!("   • GET  /redirect?url={{url|base64}}");
    info!("   • GET  /sleep?sec={{seconds}}");
    info!("   • GET  /html?content={{html|base64}}");
    info!("   • GET  /document/write?url={{url|base64}}");
}
// endregion: --- Server Setup
