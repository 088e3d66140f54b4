//! Preview server command.

use anyhow::Result;
use errror_server::{PreviewConfig, PreviewServer};

/// Run the preview server until the process is stopped.
pub async fn run(config: PreviewConfig) -> Result<()> {
    tracing::info!("Starting server on port {}", config.port);

    PreviewServer::new(config).start().await?;

    Ok(())
}
