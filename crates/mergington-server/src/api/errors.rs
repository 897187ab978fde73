//! Error handling for the Mergington API
//!
//! Every failure leaves the API as
//! `{"detail": ..., "errorDetails": {"errorCode": ..., "errorMessage": ...}}`.
//! `detail` keeps the wording the browser front end displays.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mergington_core::RosterError;
use serde_json::json;
use std::fmt;

/// API Error type for returning standard error responses
pub enum ApiError {
    /// Bad request (400)
    BadRequest(String),
    /// Not found (404)
    NotFound(String),
    /// Roster operation failure, status depends on the kind
    Roster(RosterError),
}

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        ApiError::Roster(err)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ApiError::Roster(err) => write!(f, "Roster Error: {}", err),
        }
    }
}

impl fmt::Debug for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "BadRequest({})", msg),
            ApiError::NotFound(msg) => write!(f, "NotFound({})", msg),
            ApiError::Roster(err) => write!(f, "Roster({:?})", err),
        }
    }
}

impl ApiError {
    /// Status code, error code and client-facing message
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "ERR_BAD_REQUEST", msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "ERR_NOT_FOUND", msg.clone()),
            ApiError::Roster(err) => match err {
                RosterError::NotFound(_) => (
                    StatusCode::NOT_FOUND,
                    "ERR_ACTIVITY_NOT_FOUND",
                    "Activity not found".to_string(),
                ),
                RosterError::AlreadyEnrolled { .. } => (
                    StatusCode::BAD_REQUEST,
                    "ERR_ALREADY_ENROLLED",
                    "Student is already signed up".to_string(),
                ),
                RosterError::NotSignedUp { .. } => (
                    StatusCode::BAD_REQUEST,
                    "ERR_NOT_SIGNED_UP",
                    "Student is not signed up for this activity".to_string(),
                ),
                RosterError::AtCapacity { .. } => (
                    StatusCode::BAD_REQUEST,
                    "ERR_ACTIVITY_FULL",
                    "Activity is full".to_string(),
                ),
                RosterError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "ERR_VALIDATION_ERROR", msg.clone())
                }
                RosterError::InvalidCatalog(msg) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "ERR_INVALID_CATALOG",
                    msg.clone(),
                ),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = self.parts();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = %status, "Request rejected");
        }

        let body = Json(json!({
            "detail": message,
            "errorDetails": {
                "errorCode": error_code,
                "errorMessage": message,
            }
        }));

        (status, body).into_response()
    }
}
