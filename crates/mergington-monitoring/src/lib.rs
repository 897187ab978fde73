//! Monitoring module for the Mergington activities service.

use tracing::info;

pub mod logging;

pub use logging::{init_logging, LogExt};

/// Configuration for initializing the monitoring system
#[derive(Debug, Clone)]
pub struct MonitoringConfig {
    /// Service name attached to the start-up log line
    pub service_name: String,
    /// Log level filter (e.g., "info,mergington=debug"), overridden by `RUST_LOG`
    pub log_filter: String,
    /// Emit JSON lines instead of human-readable output
    pub json_logs: bool,
    /// Environment (dev, staging, prod)
    pub environment: String,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            service_name: "mergington".to_string(),
            log_filter: "info".to_string(),
            json_logs: false,
            environment: "development".to_string(),
        }
    }
}

/// Initialize monitoring system
pub fn init(config: MonitoringConfig) -> anyhow::Result<()> {
    logging::init_logging(&config)?;

    info!(
        service_name = %config.service_name,
        environment = %config.environment,
        "Monitoring initialized"
    );

    Ok(())
}

/// Shutdown the monitoring system
pub fn shutdown() {
    info!("Shutting down monitoring system");
}
