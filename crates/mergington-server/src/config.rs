//! Configuration for the Mergington server
//!
//! This module contains the configuration type and its loading from
//! environment variables.

use mergington_monitoring::MonitoringConfig;
use std::env;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::error::{ServerError, ServerResult};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub bind_address: String,

    /// Directory served under `/static`
    pub static_dir: PathBuf,

    /// Optional YAML/JSON catalog replacing the built-in activities
    pub catalog_path: Option<PathBuf>,
}

fn default_port() -> u16 {
    8000
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_log_level() -> String {
    "info,mergington=debug".to_string()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn is_json_format(format: &str) -> bool {
    format.eq_ignore_ascii_case("json")
}

/// Monitoring settings from environment variables
///
/// Only reads the logging variables, so monitoring can be initialised before
/// `ServerConfig::load` reports problems with the rest.
pub fn monitoring_config() -> MonitoringConfig {
    monitoring_config_from_lookup(|key| env::var(key).ok())
}

/// Monitoring settings from an arbitrary variable source
pub fn monitoring_config_from_lookup<F>(lookup: F) -> MonitoringConfig
where
    F: Fn(&str) -> Option<String>,
{
    MonitoringConfig {
        service_name: "mergington-server".to_string(),
        log_filter: lookup("LOG_LEVEL").unwrap_or_else(default_log_level),
        json_logs: lookup("LOG_FORMAT").is_some_and(|format| is_json_format(&format)),
        environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn load() -> ServerResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> ServerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Start with defaults
        let mut config = Self::default();

        if let Some(port) = lookup("SERVER_PORT") {
            if let Ok(port) = port.parse::<u16>() {
                config.port = port;
            } else {
                warn!("Invalid SERVER_PORT value: {}", port);
            }
        }

        if let Some(host) = lookup("SERVER_HOST") {
            config.bind_address = host;
        }

        // LOG_LEVEL and LOG_FORMAT are consumed by `monitoring_config`
        if let Some(format) = lookup("LOG_FORMAT") {
            if !is_json_format(&format)
                && !matches!(format.to_lowercase().as_str(), "pretty" | "text")
            {
                warn!("Invalid LOG_FORMAT value: {}, using pretty", format);
            }
        }

        if let Some(static_dir) = lookup("STATIC_DIR") {
            config.static_dir = PathBuf::from(static_dir);
        }

        if let Some(catalog_path) = lookup("CATALOG_PATH") {
            if !catalog_path.trim().is_empty() {
                config.catalog_path = Some(PathBuf::from(catalog_path));
            }
        }

        // Validate required fields
        if config.bind_address.trim().is_empty() {
            return Err(ServerError::ConfigError(
                "Bind address must not be empty".to_string(),
            ));
        }

        if !config.static_dir.is_dir() {
            warn!(
                "Static directory {} does not exist - front end will not be served",
                config.static_dir.display()
            );
        }

        info!("Loaded server configuration");
        Ok(config)
    }

    /// `host:port` string for binding
    pub fn socket_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind_address: default_host(),
            static_dir: default_static_dir(),
            catalog_path: None,
        }
    }
}
