//! Service layer for listing live events joined with their host groups.

use crate::group::{
    domain::{Group, GroupId},
    ports::{GroupRepository, GroupRepositoryError},
};
use crate::live::{
    domain::Live,
    ports::{LiveRepository, LiveRepositoryError},
};
use crate::pagination::{Page, PageRequest};
use crate::sync::OrderedTaskGroup;
use std::sync::Arc;
use thiserror::Error;

/// A live event paired with its hosting group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveWithHost {
    live: Live,
    host: Group,
}

impl LiveWithHost {
    /// Pairs a live with its host.
    #[must_use]
    pub const fn new(live: Live, host: Group) -> Self {
        Self { live, host }
    }

    /// Returns the live event.
    #[must_use]
    pub const fn live(&self) -> &Live {
        &self.live
    }

    /// Returns the hosting group.
    #[must_use]
    pub const fn host(&self) -> &Group {
        &self.host
    }
}

/// Service-level errors for live listings.
#[derive(Debug, Error)]
pub enum LiveListingError {
    /// A listed live references a group that no longer exists.
    #[error("host group missing: {0}")]
    HostGroupMissing(GroupId),

    /// Live repository operation failed.
    #[error(transparent)]
    Live(#[from] LiveRepositoryError),

    /// Group repository operation failed.
    #[error(transparent)]
    Group(#[from] GroupRepositoryError),
}

/// Result type for live listing operations.
pub type LiveListingResult<T> = Result<T, LiveListingError>;

/// Live listing orchestration service.
///
/// The motivating consumer of [`OrderedTaskGroup`]: host-group lookups
/// for a page of lives run concurrently, yet results zip back against
/// the page positionally because delivery follows submission order.
#[derive(Clone)]
pub struct LiveListingService<L, G>
where
    L: LiveRepository,
    G: GroupRepository + 'static,
{
    lives: Arc<L>,
    groups: Arc<G>,
}

impl<L, G> LiveListingService<L, G>
where
    L: LiveRepository,
    G: GroupRepository + 'static,
{
    /// Creates a new live listing service.
    #[must_use]
    pub const fn new(lives: Arc<L>, groups: Arc<G>) -> Self {
        Self { lives, groups }
    }

    /// Returns a page of lives, each joined with its hosting group.
    ///
    /// # Errors
    ///
    /// Returns [`LiveListingError::HostGroupMissing`] when a live's host
    /// group cannot be resolved, or a repository error passed through
    /// unmodified. The error surfaces at the failing live's position in
    /// the page, after every earlier entry resolved.
    pub async fn page_with_hosts(
        &self,
        request: PageRequest,
    ) -> LiveListingResult<Page<LiveWithHost>> {
        let lives = self.lives.page(request).await?;
        let total = lives.total();
        let live_items = lives.into_items();

        let mut hosts: OrderedTaskGroup<Group, LiveListingError> = OrderedTaskGroup::new();
        for live in &live_items {
            let groups = Arc::clone(&self.groups);
            let group_id = live.host_group();
            hosts.submit(async move {
                groups
                    .find_by_id(group_id)
                    .await?
                    .ok_or(LiveListingError::HostGroupMissing(group_id))
            });
        }

        let mut combined = Vec::with_capacity(live_items.len());
        for live in live_items {
            let Some(host) = hosts.next().await else {
                break;
            };
            combined.push(LiveWithHost::new(live, host?));
        }
        Ok(Page::new(combined, total))
    }
}
