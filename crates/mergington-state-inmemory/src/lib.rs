//! In-memory activity registry for the Mergington activities service
//!
//! This crate provides the process-lifetime registry behind the
//! `ActivityRepository` interface defined in mergington-core. Nothing is
//! persisted; the registry is seeded once from a `Catalog`.

pub mod repository;
pub use repository::InMemoryActivityRepository;
