//! Activity endpoints: listing, signup and unregistration

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use mergington_core::{Activity, ActivityQuery, RosterError, SortKey, SortOrder, Weekday};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;

use super::errors::ApiError;
use crate::server::RosterServer;

/// Query string of `GET /activities`
#[derive(Debug, Default, Deserialize)]
pub struct ListActivitiesParams {
    /// Category, matched exactly ignoring case
    pub category: Option<String>,
    /// Whole weekday name
    pub day: Option<String>,
    /// Substring of name or description
    pub search: Option<String>,
    /// `name` or `time`
    pub sort_by: Option<SortKey>,
    /// `asc` (default) or `desc`
    pub sort_order: Option<SortOrder>,
}

impl ListActivitiesParams {
    /// Convert to a core query. Empty filter values count as absent.
    pub fn into_query(self) -> Result<ActivityQuery, RosterError> {
        let day = match non_empty(self.day) {
            Some(day) => Some(day.parse::<Weekday>()?),
            None => None,
        };

        Ok(ActivityQuery {
            category: non_empty(self.category),
            day,
            search: non_empty(self.search),
            sort_by: self.sort_by,
            sort_order: self.sort_order.unwrap_or_default(),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Query string of the signup and unregister endpoints
#[derive(Debug, Deserialize)]
pub struct EmailParams {
    /// Participant email
    pub email: String,
}

/// Confirmation body for roster changes
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}

fn bad_query(rejection: QueryRejection) -> ApiError {
    ApiError::BadRequest(rejection.body_text())
}

/// Handler for listing activities
pub async fn list_activities_handler(
    State(server): State<Arc<RosterServer>>,
    params: Result<Query<ListActivitiesParams>, QueryRejection>,
) -> Result<Json<Vec<Activity>>, ApiError> {
    let Query(params) = params.map_err(bad_query)?;
    let query = params
        .into_query()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let activities = server.roster().list_activities(&query).await?;
    Ok(Json(activities))
}

/// Handler for signing a student up for an activity
#[instrument(skip(server, params), fields(activity = %activity_name))]
pub async fn signup_handler(
    State(server): State<Arc<RosterServer>>,
    Path(activity_name): Path<String>,
    params: Result<Query<EmailParams>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(EmailParams { email }) = params.map_err(bad_query)?;

    server.roster().enroll(&activity_name, &email).await?;

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", email, activity_name),
    }))
}

/// Handler for unregistering a student from an activity
#[instrument(skip(server, params), fields(activity = %activity_name))]
pub async fn unregister_handler(
    State(server): State<Arc<RosterServer>>,
    Path(activity_name): Path<String>,
    params: Result<Query<EmailParams>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(EmailParams { email }) = params.map_err(bad_query)?;

    server.roster().withdraw(&activity_name, &email).await?;

    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", email, activity_name),
    }))
}
