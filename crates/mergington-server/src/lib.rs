//!
//! Mergington Server - HTTP service for Mergington High School extracurricular activities
//!
//! This module exports all the components of the Mergington Server.

/// API module
pub mod api;

/// Server module
pub mod server;

/// Configuration module
pub mod config;

/// Error module
pub mod error;

// Re-export key types
pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::RosterServer;

/// Build the server from `config` and run it until shutdown
pub async fn run(config: ServerConfig) -> ServerResult<()> {
    let server = RosterServer::from_config(config)?;
    server.run().await
}
