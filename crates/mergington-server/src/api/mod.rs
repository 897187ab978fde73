//! API module for the Mergington server
//!
//! This module contains the routes and handlers of the HTTP API and mounts
//! the static front end.

use axum::{
    http::Uri,
    middleware as axum_middleware,
    response::Redirect,
    routing::{delete, get, post},
    Router,
};
use mergington_monitoring::logging::axum_integration::correlation_id_middleware;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

pub mod activities;
pub mod errors;
pub mod health;

pub use errors::ApiError;

use crate::server::RosterServer;

/// Page the root path redirects to
pub const INDEX_PATH: &str = "/static/index.html";

/// Build the router for API endpoints and static assets
pub fn build_router(server: Arc<RosterServer>) -> Router {
    let static_files = ServeDir::new(&server.config.static_dir);

    Router::new()
        .route("/", get(root_redirect))
        // Activities
        .route("/activities", get(activities::list_activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(activities::unregister_handler),
        )
        // Health check
        .route("/health", get(health::health_check))
        // Front end
        .nest_service("/static", static_files)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(correlation_id_middleware))
        .with_state(server)
}

async fn root_redirect() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
