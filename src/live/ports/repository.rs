//! Repository port for live event persistence and listing.

use crate::group::domain::GroupId;
use crate::live::domain::{Live, LiveId};
use crate::pagination::{Page, PageRequest};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for live repository operations.
pub type LiveRepositoryResult<T> = Result<T, LiveRepositoryError>;

/// Live event persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LiveRepository: Send + Sync {
    /// Stores a new live event.
    ///
    /// # Errors
    ///
    /// Returns [`LiveRepositoryError::DuplicateLive`] when the live ID
    /// already exists.
    async fn create(&self, live: &Live) -> LiveRepositoryResult<()>;

    /// Finds a live event by identifier.
    ///
    /// Returns `None` when the live does not exist.
    async fn find_by_id(&self, id: LiveId) -> LiveRepositoryResult<Option<Live>>;

    /// Returns a page of all live events, with the total live count.
    async fn page(&self, request: PageRequest) -> LiveRepositoryResult<Page<Live>>;

    /// Returns a page of live events hosted by `group`, with the total
    /// count for that group.
    async fn page_by_group(
        &self,
        group: GroupId,
        request: PageRequest,
    ) -> LiveRepositoryResult<Page<Live>>;
}

/// Errors returned by live repository implementations.
#[derive(Debug, Clone, Error)]
pub enum LiveRepositoryError {
    /// A live with the same identifier already exists.
    #[error("duplicate live identifier: {0}")]
    DuplicateLive(LiveId),

    /// The live was not found.
    #[error("live not found: {0}")]
    NotFound(LiveId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl LiveRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
