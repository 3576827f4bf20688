use pints_dashboard::{AppState, Config, load_records, router};
use std::net::SocketAddr;
use tokio::fs;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    if let Some(parent) = config.records_path.parent() {
        fs::create_dir_all(parent).await?;
    }
    if fs::metadata(&config.pints_info_path).await.is_err() {
        warn!(
            "aggregate data {} not found; stats will be unavailable until it exists",
            config.pints_info_path.display()
        );
    }

    let records = load_records(&config.records_path).await?;
    info!(records = records.records.len(), "loaded pint records");
    let app = router(AppState::new(&config, records));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {err}");
    }
    info!("shutting down");
}
