//! Error types for live domain validation.

use thiserror::Error;

/// Errors returned while constructing live domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LiveDomainError {
    /// The live title is empty after trimming.
    #[error("live title must not be empty")]
    EmptyLiveTitle,
}
