//! Beacon: a minimal HTTP liveness service.
//!
//! This is the application entry point. It loads configuration from a TOML
//! file, initializes tracing, builds the Axum router with the greeting and
//! health-check routes, and starts the HTTP server.

mod config;
mod http;
mod middleware;
mod routes;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use routes::create_router;

/// Beacon: a minimal HTTP liveness service
#[derive(Parser, Debug)]
#[command(name = "beacon", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "beacon=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration first so logging.format can select the output layer
    let config = AppConfig::load(&args.config)?;

    // Initialize tracing with filter priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Loaded configuration");

    // Create router
    let app = create_router();

    // Start server
    let addr = config.http.socket_addr()?;
    http::start_server(app, addr).await?;

    Ok(())
}
