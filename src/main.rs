mod adapters;
mod application;
mod config;
mod domain;
mod interface;
mod ports;

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use adapters::{HttpNumberSource, MemoryWindowStore};
use application::AveragingService;
use config::Config;
use domain::NumberCategory;
use interface::http::create_router;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("average_calculator={},tower_http=info", config.log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting average-calculator v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: {:?}", config);

    // Initialize adapters
    let number_source = HttpNumberSource::new(config.upstream_url.clone(), config.upstream_timeout)?;
    let window_store = MemoryWindowStore::new(config.window_size);

    let averaging_service = Arc::new(AveragingService::new(
        Arc::new(number_source),
        Arc::new(window_store),
    ));

    info!("✓ Averaging service initialized");

    // Create HTTP server
    let app = create_router(averaging_service);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("✓ Server is running on port {}", config.port);
    let codes: Vec<&str> = NumberCategory::ALL.iter().map(|c| c.code()).collect();
    info!("  → API: http://localhost:{}/numbers/{{{}}}", config.port, codes.join(","));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
