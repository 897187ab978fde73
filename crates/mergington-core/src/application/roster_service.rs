use crate::{
    domain::activity::Activity,
    domain::query::ActivityQuery,
    domain::repository::ActivityRepository,
    RosterError,
};
use std::sync::Arc;

/// Service exposing the roster operations to the boundary layer
#[derive(Clone)]
pub struct RosterService {
    /// Registry the operations run against
    repository: Arc<dyn ActivityRepository>,
}

impl RosterService {
    /// Create a new roster service over a registry
    pub fn new(repository: Arc<dyn ActivityRepository>) -> Self {
        Self { repository }
    }

    /// List activities matching `query`, filtered then sorted
    pub async fn list_activities(&self, query: &ActivityQuery) -> Result<Vec<Activity>, RosterError> {
        let snapshot = self.repository.find_all().await?;
        let total = snapshot.len();
        let activities = query.apply(snapshot);

        tracing::debug!(
            total,
            matched = activities.len(),
            category = ?query.category,
            day = ?query.day,
            search = ?query.search,
            sort_by = ?query.sort_by,
            "Listed activities"
        );

        Ok(activities)
    }

    /// Sign `email` up for `activity_name`
    pub async fn enroll(&self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        match self.repository.enroll(activity_name, email).await {
            Ok(()) => {
                tracing::info!(activity = %activity_name, %email, "Participant enrolled");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(activity = %activity_name, %email, error = %err, "Enrollment rejected");
                Err(err)
            }
        }
    }

    /// Unregister `email` from `activity_name`
    pub async fn withdraw(&self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        match self.repository.withdraw(activity_name, email).await {
            Ok(()) => {
                tracing::info!(activity = %activity_name, %email, "Participant withdrawn");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(activity = %activity_name, %email, error = %err, "Withdrawal rejected");
                Err(err)
            }
        }
    }

    /// Look up a single activity by name
    pub async fn get_activity(&self, name: &str) -> Result<Activity, RosterError> {
        self.repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| RosterError::NotFound(name.to_string()))
    }

    /// Number of activities in the registry
    pub async fn activity_count(&self) -> Result<usize, RosterError> {
        self.repository.count().await
    }
}
