//! Fund Profit API - Server Binary
//!
//! This binary starts the HTTP API server for the mutual fund profit service.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin fund-profit-api
//!
//! # Run with environment variables
//! API_HOST=0.0.0.0 API_PORT=8080 API_UPSTREAM_TIMEOUT_MS=5000 cargo run --bin fund-profit-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 127.0.0.1)
//! * `API_PORT` - Server port (default: 8000)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_NAV_API_BASE_URL` - Root of the NAV provider's scheme feeds
//!   (default: https://api.mfapi.in/mf)
//! * `API_NAV_DATE_FORMAT` - strftime pattern for dates sent upstream (default: %Y-%m-%d)
//! * `API_UPSTREAM_TIMEOUT_MS` - Timeout for one NAV request (default: 10000)
//! * `API_CONCURRENT_FETCH` - Fetch both NAVs at once (default: true)
//!
//! Startup fails if any of these is set to a value that does not parse.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use interface_api::{build_service, config::ApiConfig, create_router};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, builds the profit service
/// and starts the HTTP server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("invalid API_* configuration")?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        nav_api_base_url = %config.nav_api_base_url,
        upstream_timeout_ms = config.upstream_timeout_ms,
        "Starting Fund Profit API Server"
    );

    let service = build_service(&config).context("failed to configure NAV provider")?;
    tracing::info!(fetch_mode = ?service.fetch_mode(), "NAV provider configured");

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address {}", config.server_addr()))?;

    let app = create_router(Arc::new(service));

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
