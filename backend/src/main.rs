//! # Browser Probe Server
//!
//! Thin entry point that loads configuration and delegates to lib-web.

use lib_core::Config;
use lib_web::start_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    start_server(config).await
}
