//! Service layer for scheduling live events.

use crate::group::{
    domain::GroupId,
    ports::{GroupRepository, GroupRepositoryError},
};
use crate::live::{
    domain::{Live, LiveDomainError, LiveTitle},
    ports::{LiveRepository, LiveRepositoryError},
};
use crate::sync::OrderedTaskGroup;
use crate::user::domain::{Role, User, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for scheduling a live event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateLiveRequest {
    author: User,
    host_group: GroupId,
    title: String,
    starts_at: DateTime<Utc>,
}

impl CreateLiveRequest {
    /// Creates a scheduling request for an authenticated acting user.
    #[must_use]
    pub fn new(
        author: User,
        host_group: GroupId,
        title: impl Into<String>,
        starts_at: DateTime<Utc>,
    ) -> Self {
        Self {
            author,
            host_group,
            title: title.into(),
            starts_at,
        }
    }
}

/// Service-level errors for live scheduling.
#[derive(Debug, Error)]
pub enum LiveScheduleError {
    /// Fans cannot schedule live events.
    #[error("fans cannot create a live")]
    FanCannotCreateLive,

    /// The hosting group does not exist.
    #[error("host group not found: {0}")]
    HostGroupNotFound(GroupId),

    /// The scheduling artist does not belong to the hosting group.
    #[error("user {user} is not a member of host group {group}")]
    IsNotMemberOfHostGroup {
        /// Hosting group.
        group: GroupId,
        /// Acting user.
        user: UserId,
    },

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] LiveDomainError),

    /// Live repository operation failed.
    #[error(transparent)]
    Live(#[from] LiveRepositoryError),

    /// Group repository operation failed.
    #[error(transparent)]
    Group(#[from] GroupRepositoryError),
}

/// Result type for live scheduling operations.
pub type LiveScheduleResult<T> = Result<T, LiveScheduleError>;

/// Live scheduling orchestration service.
#[derive(Clone)]
pub struct CreateLiveService<L, G, C>
where
    L: LiveRepository,
    G: GroupRepository + 'static,
    C: Clock + Send + Sync,
{
    lives: Arc<L>,
    groups: Arc<G>,
    clock: Arc<C>,
}

impl<L, G, C> CreateLiveService<L, G, C>
where
    L: LiveRepository,
    G: GroupRepository + 'static,
    C: Clock + Send + Sync,
{
    /// Creates a new live scheduling service.
    #[must_use]
    pub const fn new(lives: Arc<L>, groups: Arc<G>, clock: Arc<C>) -> Self {
        Self {
            lives,
            groups,
            clock,
        }
    }

    /// Schedules a live event hosted by a group the acting artist
    /// belongs to. The created live's author is the acting user.
    ///
    /// The host-group existence and membership checks run concurrently
    /// and are consumed in submission order, so the reported failure is
    /// deterministic regardless of which read completes first.
    ///
    /// # Errors
    ///
    /// Returns [`LiveScheduleError::FanCannotCreateLive`] without
    /// touching storage when the acting user is a fan,
    /// [`LiveScheduleError::HostGroupNotFound`] or
    /// [`LiveScheduleError::IsNotMemberOfHostGroup`] on a failed
    /// precondition, a domain error for an empty title, or a repository
    /// error passed through unmodified.
    pub async fn create_live(&self, request: CreateLiveRequest) -> LiveScheduleResult<Live> {
        match request.author.role() {
            Role::Fan => {
                tracing::debug!(user = %request.author.id(), "live rejected, fan role");
                return Err(LiveScheduleError::FanCannotCreateLive);
            }
            Role::Artist { .. } => {}
        }

        let author = request.author.id();
        let host_group = request.host_group;

        let mut checks: OrderedTaskGroup<bool, LiveScheduleError> = OrderedTaskGroup::new();
        let exists_groups = Arc::clone(&self.groups);
        checks.submit(async move { Ok(exists_groups.exists(host_group).await?) });
        let member_groups = Arc::clone(&self.groups);
        checks.submit(async move { Ok(member_groups.is_member(host_group, author).await?) });

        let group_exists = next_check(&mut checks).await?;
        let author_is_member = next_check(&mut checks).await?;

        if !group_exists {
            return Err(LiveScheduleError::HostGroupNotFound(host_group));
        }
        if !author_is_member {
            return Err(LiveScheduleError::IsNotMemberOfHostGroup {
                group: host_group,
                user: author,
            });
        }

        let title = LiveTitle::new(request.title)?;
        let live = Live::new(title, host_group, author, request.starts_at, &*self.clock);
        self.lives.create(&live).await?;
        Ok(live)
    }
}

/// Drains one precondition result, treating an exhausted group as a
/// failed check.
async fn next_check(
    checks: &mut OrderedTaskGroup<bool, LiveScheduleError>,
) -> LiveScheduleResult<bool> {
    match checks.next().await {
        Some(result) => result,
        None => Ok(false),
    }
}
