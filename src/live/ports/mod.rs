//! Port contracts for live event persistence.

pub mod repository;

pub use repository::{LiveRepository, LiveRepositoryError, LiveRepositoryResult};
