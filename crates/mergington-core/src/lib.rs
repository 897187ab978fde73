//!
//! Mergington Core - domain model for the extracurricular activity roster
//!
//! This crate defines the activity records, the query (filter + sort)
//! semantics, the roster error kinds and the repository interface that
//! storage crates implement. The `RosterService` in the application layer is
//! the entry point the HTTP boundary talks to.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Domain layer - activity records, weekdays, queries and the catalog
pub mod domain;

/// Application services - roster operations over a repository
pub mod application;

/// Error types
pub mod error;

// Re-export key types
pub use application::roster_service::RosterService;
pub use domain::activity::{Activity, WeekdaySet};
pub use domain::catalog::Catalog;
pub use domain::query::{ActivityQuery, SortKey, SortOrder};
pub use domain::repository::ActivityRepository;
pub use domain::weekday::Weekday;
pub use error::{RosterError, RosterResult};
