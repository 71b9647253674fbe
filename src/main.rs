//! HR dashboard server.
//!
//! Loads the configuration directory named by `HR_DASHBOARD_CONFIG`
//! (default `./config/sample`) and serves the dashboard API.

use std::net::SocketAddr;

use anyhow::Context;
use hr_dashboard::api::{AppState, create_router};
use hr_dashboard::config::ConfigLoader;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG_DIR: &str = "./config/sample";

/// Initialize tracing/logging
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hr_dashboard=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config_dir =
        std::env::var("HR_DASHBOARD_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("loading configuration from {}", config_dir))?;
    let state = AppState::from_config(&config).context("building record store")?;

    let server = &config.settings().server;
    let addr: SocketAddr = format!("{}:{}", server.host, server.port).parse()?;
    let app = create_router(state).layer(TraceLayer::new_for_http());

    tracing::info!(%addr, config_dir = %config_dir, "Starting HR dashboard server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
