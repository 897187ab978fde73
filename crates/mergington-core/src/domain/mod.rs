//! Domain layer: activity records, weekdays, query semantics, the seed
//! catalog and the repository interface.

/// Activity records and weekday sets
pub mod activity;

/// Seed catalog loading and validation
pub mod catalog;

/// Filtering and sorting
pub mod query;

/// Repository trait for the registry
pub mod repository;

/// Weekday names
pub mod weekday;
