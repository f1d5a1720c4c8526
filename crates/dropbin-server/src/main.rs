//! Upload endpoint for the dropbin widget.
//!
//! Accepts a multipart batch on `POST /api/upload`, writes every file
//! into a flat public directory and answers with the stored blobs'
//! metadata. The directory is served back under `/blobs`.

mod config;
mod error;
mod routes;
mod store;
mod upload;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().compact())
        .init();

    let config = ServerConfig::parse();

    tokio::fs::create_dir_all(&config.storage_dir).await?;
    tracing::info!(
        storage_dir = %config.storage_dir.display(),
        public_base_url = %config.public_base_url,
        field = %config.field_name,
        "blob storage ready"
    );

    let app = routes::router(&config);
    let listener = tokio::net::TcpListener::bind(config.listen).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Resolve on Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
