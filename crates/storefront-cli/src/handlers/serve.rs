//! `storefront serve` - run the HTTP server.

use anyhow::Result;
use storefront_axum::{ServerConfig, start_server};
use tracing::info;

pub async fn execute(config: ServerConfig) -> Result<()> {
    info!(
        host = %config.host,
        port = config.port,
        service = %config.service_name,
        "Starting storefront server"
    );
    start_server(config).await
}
