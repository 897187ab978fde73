use anyhow::{Context, Result};
use mergington_server::config::{self, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Set up monitoring
    mergington_monitoring::init(config::monitoring_config())
        .context("Failed to initialize monitoring")?;

    // Load configuration from environment variables
    let config = ServerConfig::load().context("Failed to load configuration")?;

    // Run the server using the library's run function
    mergington_server::run(config).await.context("Server error")?;

    mergington_monitoring::shutdown();
    Ok(())
}
