//! Port contracts for group persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by group services.

pub mod repository;

pub use repository::{GroupRepository, GroupRepositoryError, GroupRepositoryResult};
