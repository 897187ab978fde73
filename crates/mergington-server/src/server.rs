//! Server implementation for the Mergington activities service

use axum::Router;
use chrono::{DateTime, Utc};
use mergington_core::{Catalog, RosterService};
use mergington_monitoring::LogExt;
use mergington_state_inmemory::InMemoryActivityRepository;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};

/// Main server implementation
#[derive(Clone)]
pub struct RosterServer {
    /// Configuration
    pub config: ServerConfig,

    /// Roster operations over the activity registry
    roster: RosterService,

    /// When this server instance was created
    started_at: DateTime<Utc>,
}

impl std::fmt::Debug for RosterServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RosterServer")
            .field("config", &self.config)
            .field("started_at", &self.started_at)
            .finish()
    }
}

impl RosterServer {
    /// Create a new RosterServer over an existing roster service
    pub fn new(config: ServerConfig, roster: RosterService) -> Self {
        Self {
            config,
            roster,
            started_at: Utc::now(),
        }
    }

    /// Create a server whose registry is seeded from the configured catalog
    ///
    /// Without `catalog_path` the built-in Mergington activities are used.
    pub fn from_config(config: ServerConfig) -> ServerResult<Self> {
        let catalog = load_catalog(&config)?;
        let repository = Arc::new(InMemoryActivityRepository::from_catalog(catalog));
        Ok(Self::new(config, RosterService::new(repository)))
    }

    /// Roster service used by the handlers
    pub fn roster(&self) -> &RosterService {
        &self.roster
    }

    /// Creation time of this instance
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Build the HTTP application for this server
    pub fn router(&self) -> Router {
        crate::api::build_router(Arc::new(self.clone()))
    }

    /// Run the server until Ctrl-C or SIGTERM
    pub async fn run(self) -> ServerResult<()> {
        info!("Starting Mergington activities server");

        let app = self.router();

        let listener = TcpListener::bind(self.config.socket_address()).await?;
        let addr = listener.local_addr()?;
        info!("Listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

fn load_catalog(config: &ServerConfig) -> ServerResult<Catalog> {
    match &config.catalog_path {
        Some(path) => Catalog::from_path(path)
            .map_err(|e| ServerError::CatalogError(e.to_string()))
            .log_err("Failed to load activity catalog"),
        None => {
            info!("Using built-in activity catalog");
            Ok(Catalog::default_seed())
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_from_config_uses_builtin_catalog() {
        let server = RosterServer::from_config(ServerConfig::default()).unwrap();
        assert_eq!(server.roster().activity_count().await.unwrap(), 9);
    }

    #[tokio::test]
    async fn test_from_config_loads_catalog_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            r#"
- name: Robotics
  description: Build robots
  schedule: Mondays, 4:00 PM - 5:30 PM
  max_participants: 2
  category: Academic
  day: Monday
  time: "16:00"
"#
        )
        .unwrap();

        let config = ServerConfig {
            catalog_path: Some(file.path().to_path_buf()),
            ..ServerConfig::default()
        };
        let server = RosterServer::from_config(config).unwrap();

        let robotics = server.roster().get_activity("Robotics").await.unwrap();
        assert!(robotics.participants.is_empty());
        assert_eq!(server.roster().activity_count().await.unwrap(), 1);
    }

    #[test]
    fn test_missing_catalog_file_is_an_error() {
        let config = ServerConfig {
            catalog_path: Some("/nonexistent/activities.yaml".into()),
            ..ServerConfig::default()
        };
        let result = RosterServer::from_config(config);
        assert!(matches!(result, Err(ServerError::CatalogError(_))));
    }
}
