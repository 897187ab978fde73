//! Health check endpoint for the Mergington server

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

use crate::server::RosterServer;

/// Health check handler
///
/// Reports the service version, uptime start and the size of the registry.
pub async fn health_check(State(server): State<Arc<RosterServer>>) -> impl IntoResponse {
    debug!("Health check requested");

    match server.roster().activity_count().await {
        Ok(activities) => (
            StatusCode::OK,
            Json(json!({
                "status": "UP",
                "version": env!("CARGO_PKG_VERSION"),
                "activities": activities,
                "startedAt": server.started_at().to_rfc3339(),
                "timestamp": Utc::now().to_rfc3339(),
            })),
        ),
        Err(err) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "DOWN",
                "error": err.to_string(),
                "timestamp": Utc::now().to_rfc3339(),
            })),
        ),
    }
}
