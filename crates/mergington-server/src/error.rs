//! Error types for the Mergington server
//!
//! This module contains the error types used by configuration, start-up and
//! the server loop. Request-level failures are `ApiError`s (see `api::errors`).

use thiserror::Error;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Catalog could not be loaded or failed validation
    #[error("Catalog error: {0}")]
    CatalogError(String),

    /// Internal server error
    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::InternalError(format!("IO error: {}", err))
    }
}
