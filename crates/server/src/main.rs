use anyhow::{Context, Result};
use db::DBService;
use server::{AppState, config::Config};
use tokio::net::TcpListener;
use tracing::info;
use utils::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_logging(config.log_format);

    let db = DBService::new(&config.database_url)
        .await
        .with_context(|| format!("failed to open database at {}", config.database_url))?;
    let app = server::app(AppState::new(db));

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;
    info!(addr = %listener.local_addr()?, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}
