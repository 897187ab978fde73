use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, info};
use async_trait::async_trait;

use mergington_core::{Activity, ActivityRepository, Catalog, RosterError};

/// In-memory implementation of the ActivityRepository
///
/// The key set is fixed at construction, so only the records themselves are
/// locked. Each record has its own `RwLock`; enroll and withdraw hold the
/// record's write lock across their check and mutation.
pub struct InMemoryActivityRepository {
    /// Records in registry order
    records: Vec<RwLock<Activity>>,

    /// Activity name -> position in `records`
    index: HashMap<String, usize>,
}

impl InMemoryActivityRepository {
    /// Create a registry seeded from a validated catalog
    pub fn from_catalog(catalog: Catalog) -> Self {
        let activities = catalog.into_activities();
        let index = activities
            .iter()
            .enumerate()
            .map(|(position, activity)| (activity.name.clone(), position))
            .collect();
        let records: Vec<_> = activities.into_iter().map(RwLock::new).collect();

        info!(activities = records.len(), "Creating new InMemoryActivityRepository");
        Self { records, index }
    }

    fn record(&self, name: &str) -> Result<&RwLock<Activity>, RosterError> {
        self.index
            .get(name)
            .map(|&position| &self.records[position])
            .ok_or_else(|| RosterError::NotFound(name.to_string()))
    }
}

impl Default for InMemoryActivityRepository {
    fn default() -> Self {
        Self::from_catalog(Catalog::default_seed())
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn find_all(&self) -> Result<Vec<Activity>, RosterError> {
        let mut snapshot = Vec::with_capacity(self.records.len());
        for record in &self.records {
            snapshot.push(record.read().await.clone());
        }
        Ok(snapshot)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, RosterError> {
        match self.index.get(name) {
            Some(&position) => Ok(Some(self.records[position].read().await.clone())),
            None => Ok(None),
        }
    }

    async fn enroll(&self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        let mut activity = self.record(activity_name)?.write().await;

        if activity.is_enrolled(email) {
            return Err(RosterError::AlreadyEnrolled {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        if activity.is_full() {
            return Err(RosterError::AtCapacity {
                activity: activity_name.to_string(),
                max_participants: activity.max_participants,
            });
        }

        activity.participants.push(email.to_string());
        debug!(
            activity = %activity_name,
            participants = activity.participants.len(),
            spots_left = activity.spots_left(),
            "Roster updated"
        );
        Ok(())
    }

    async fn withdraw(&self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        let mut activity = self.record(activity_name)?.write().await;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| RosterError::NotSignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            })?;

        activity.participants.remove(position);
        debug!(
            activity = %activity_name,
            participants = activity.participants.len(),
            "Roster updated"
        );
        Ok(())
    }

    async fn count(&self) -> Result<usize, RosterError> {
        Ok(self.records.len())
    }
}
