//! Structured logging module using tracing.
//!
//! Human-readable output for development, JSON lines for log aggregation.

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::MonitoringConfig;

/// Initialize structured logging
pub fn init_logging(config: &MonitoringConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .with_context(|| format!("Invalid log filter: {}", config.log_filter))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.json_logs {
        let json_layer = fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true);

        registry
            .with(json_layer)
            .try_init()
            .context("Failed to set global default subscriber")?;
    } else {
        let fmt_layer = fmt::layer().with_target(true);

        registry
            .with(fmt_layer)
            .try_init()
            .context("Failed to set global default subscriber")?;
    }

    Ok(())
}

/// Correlation ID middleware for axum routers
#[cfg(feature = "axum")]
pub mod axum_integration {
    use axum::{
        extract::Request,
        http::{HeaderMap, HeaderValue},
        middleware::Next,
        response::Response,
    };
    use tracing::{info_span, Instrument};
    use uuid::Uuid;

    /// Header carrying the correlation ID in both directions
    pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

    /// Get correlation ID from headers or generate a new one
    pub fn get_correlation_id(headers: &HeaderMap) -> String {
        headers
            .get(CORRELATION_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(|value| value.to_string())
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    /// Runs the request inside a span carrying its correlation ID and echoes
    /// the ID back on the response
    pub async fn correlation_id_middleware(req: Request, next: Next) -> Response {
        let correlation_id = get_correlation_id(req.headers());

        let span = info_span!(
            "request",
            correlation_id = %correlation_id,
            method = %req.method(),
            uri = %req.uri(),
        );

        let mut response = next.run(req).instrument(span).await;
        if let Ok(value) = HeaderValue::from_str(&correlation_id) {
            response.headers_mut().insert(CORRELATION_ID_HEADER, value);
        }
        response
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use axum::{body::Body, http::StatusCode, middleware, routing::get, Router};
        use tower::ServiceExt;

        fn app() -> Router {
            Router::new()
                .route("/", get(|| async { "ok" }))
                .layer(middleware::from_fn(correlation_id_middleware))
        }

        #[tokio::test]
        async fn test_existing_correlation_id_is_echoed() {
            let request = axum::http::Request::builder()
                .uri("/")
                .header(CORRELATION_ID_HEADER, "abc-123")
                .body(Body::empty())
                .unwrap();

            let response = app().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(response.headers()[CORRELATION_ID_HEADER], "abc-123");
        }

        #[tokio::test]
        async fn test_missing_correlation_id_is_generated() {
            let request = axum::http::Request::builder()
                .uri("/")
                .body(Body::empty())
                .unwrap();

            let response = app().oneshot(request).await.unwrap();
            let generated = response.headers()[CORRELATION_ID_HEADER].to_str().unwrap();
            assert!(Uuid::parse_str(generated).is_ok());
        }
    }
}

/// Trait to add log context to results
pub trait LogExt<T, E> {
    /// Log error with additional context before returning
    fn log_err(self, message: &str) -> Result<T, E>;

    /// Log success with additional context before returning
    fn log_ok(self, message: &str) -> Result<T, E>;
}

impl<T, E: std::fmt::Display> LogExt<T, E> for Result<T, E> {
    fn log_err(self, message: &str) -> Result<T, E> {
        if let Err(ref e) = self {
            tracing::error!("{}: {}", message, e);
        }
        self
    }

    fn log_ok(self, message: &str) -> Result<T, E> {
        if self.is_ok() {
            tracing::info!("{}", message);
        }
        self
    }
}
