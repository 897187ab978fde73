//! Repository trait for the activity registry
//!
//! Storage crates implement this trait. Implementations must make the
//! check-then-mutate steps of `enroll` and `withdraw` atomic per activity.

use async_trait::async_trait;

use super::activity::Activity;
use crate::error::RosterError;

/// Registry of activities keyed by name
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Snapshot of every activity, in registry order
    async fn find_all(&self) -> Result<Vec<Activity>, RosterError>;

    /// Snapshot of one activity
    async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, RosterError>;

    /// Append `email` to the roster of `activity_name`.
    ///
    /// Fails with `NotFound`, `AlreadyEnrolled` or `AtCapacity`, checked in
    /// that order.
    async fn enroll(&self, activity_name: &str, email: &str) -> Result<(), RosterError>;

    /// Remove `email` from the roster of `activity_name`.
    ///
    /// Fails with `NotFound` or `NotSignedUp`.
    async fn withdraw(&self, activity_name: &str, email: &str) -> Result<(), RosterError>;

    /// Number of activities in the registry
    async fn count(&self) -> Result<usize, RosterError>;
}
