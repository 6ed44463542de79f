//! Service layer for artist-authored group feed posts.

use crate::group::{
    domain::{FeedBody, FeedPost, GroupDomainError, GroupId},
    ports::{GroupRepository, GroupRepositoryError},
};
use crate::user::domain::{Role, User, UserId};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for posting to a group feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFeedPostRequest {
    author: User,
    group_id: GroupId,
    body: String,
}

impl CreateFeedPostRequest {
    /// Creates a post request for an authenticated acting user.
    #[must_use]
    pub fn new(author: User, group_id: GroupId, body: impl Into<String>) -> Self {
        Self {
            author,
            group_id,
            body: body.into(),
        }
    }
}

/// Service-level errors for feed operations.
#[derive(Debug, Error)]
pub enum GroupFeedError {
    /// Fans cannot post to a group feed.
    #[error("fans cannot post to a group feed")]
    FanCannotPost,

    /// The author does not belong to the group.
    #[error("user {user} is not a member of group {group}")]
    AuthorNotMember {
        /// Target group.
        group: GroupId,
        /// Acting user.
        user: UserId,
    },

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] GroupDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] GroupRepositoryError),
}

/// Result type for feed service operations.
pub type GroupFeedResult<T> = Result<T, GroupFeedError>;

/// Group feed orchestration service.
#[derive(Clone)]
pub struct GroupFeedService<G, C>
where
    G: GroupRepository,
    C: Clock + Send + Sync,
{
    groups: Arc<G>,
    clock: Arc<C>,
}

impl<G, C> GroupFeedService<G, C>
where
    G: GroupRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new feed service.
    #[must_use]
    pub const fn new(groups: Arc<G>, clock: Arc<C>) -> Self {
        Self { groups, clock }
    }

    /// Posts to a group's feed on behalf of an artist member.
    ///
    /// # Errors
    ///
    /// Returns [`GroupFeedError::FanCannotPost`] without touching storage
    /// when the acting user is a fan,
    /// [`GroupFeedError::AuthorNotMember`] when the artist does not
    /// belong to the group, a domain error for an empty body, or a
    /// repository error passed through unmodified.
    pub async fn post(&self, request: CreateFeedPostRequest) -> GroupFeedResult<FeedPost> {
        match request.author.role() {
            Role::Fan => {
                tracing::debug!(user = %request.author.id(), "post rejected, fan role");
                return Err(GroupFeedError::FanCannotPost);
            }
            Role::Artist { .. } => {}
        }

        let author = request.author.id();
        if !self.groups.is_member(request.group_id, author).await? {
            return Err(GroupFeedError::AuthorNotMember {
                group: request.group_id,
                user: author,
            });
        }

        let body = FeedBody::new(request.body)?;
        let post = FeedPost::new(request.group_id, author, body, &*self.clock);
        self.groups.create_feed_post(&post).await?;
        Ok(post)
    }
}
