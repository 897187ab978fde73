/// Roster operations: list, enroll, withdraw
pub mod roster_service;
