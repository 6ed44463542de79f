//! Service layer for social follow orchestration.

use crate::pagination::{Page, PageRequest};
use crate::sync::OrderedTaskGroup;
use crate::user::{
    domain::{Follow, User, UserDomainError, UserId},
    ports::{
        UserRepository, UserRepositoryError, UserSocialRepository, UserSocialRepositoryError,
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for following another user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowUserRequest {
    follower: User,
    followee: UserId,
}

impl FollowUserRequest {
    /// Creates a follow request for an authenticated acting user.
    #[must_use]
    pub const fn new(follower: User, followee: UserId) -> Self {
        Self { follower, followee }
    }
}

/// Service-level errors for follow operations.
#[derive(Debug, Error)]
pub enum FollowServiceError {
    /// The followed user does not exist.
    #[error("followee not found: {0}")]
    FolloweeNotFound(UserId),

    /// The follow edge already exists.
    #[error("user {follower} already follows {followee}")]
    AlreadyFollowing {
        /// Following user.
        follower: UserId,
        /// Followed user.
        followee: UserId,
    },

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] UserDomainError),

    /// User repository operation failed.
    #[error(transparent)]
    User(#[from] UserRepositoryError),

    /// Social repository operation failed.
    #[error(transparent)]
    Social(#[from] UserSocialRepositoryError),
}

/// Result type for follow service operations.
pub type FollowServiceResult<T> = Result<T, FollowServiceError>;

/// Social-graph orchestration service.
#[derive(Clone)]
pub struct FollowService<U, S, C>
where
    U: UserRepository + 'static,
    S: UserSocialRepository + 'static,
    C: Clock + Send + Sync,
{
    users: Arc<U>,
    social: Arc<S>,
    clock: Arc<C>,
}

impl<U, S, C> FollowService<U, S, C>
where
    U: UserRepository + 'static,
    S: UserSocialRepository + 'static,
    C: Clock + Send + Sync,
{
    /// Creates a new follow service.
    #[must_use]
    pub const fn new(users: Arc<U>, social: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            users,
            social,
            clock,
        }
    }

    /// Creates a follow edge from the acting user to `followee`.
    ///
    /// The followee-existence and duplicate-edge checks run concurrently
    /// and are consumed in submission order, so the first failed
    /// precondition reported is deterministic.
    ///
    /// # Errors
    ///
    /// Returns [`FollowServiceError::FolloweeNotFound`] when the followee
    /// does not exist, [`FollowServiceError::AlreadyFollowing`] when the
    /// edge already exists, a domain error for self-follows, or a
    /// repository error passed through unmodified.
    pub async fn follow(&self, request: FollowUserRequest) -> FollowServiceResult<Follow> {
        let follower = request.follower.id();
        let followee = request.followee;

        // Domain validation precedes any storage access.
        let follow = Follow::new(follower, followee, &*self.clock)?;

        let mut checks: OrderedTaskGroup<bool, FollowServiceError> = OrderedTaskGroup::new();
        let users = Arc::clone(&self.users);
        checks.submit(async move { Ok(users.exists(followee).await?) });
        let social = Arc::clone(&self.social);
        checks.submit(async move { Ok(social.is_following(follower, followee).await?) });

        let followee_exists = next_check(&mut checks).await?;
        let already_following = next_check(&mut checks).await?;

        if !followee_exists {
            tracing::debug!(%followee, "follow rejected, followee missing");
            return Err(FollowServiceError::FolloweeNotFound(followee));
        }
        if already_following {
            tracing::debug!(%follower, %followee, "follow rejected, edge exists");
            return Err(FollowServiceError::AlreadyFollowing { follower, followee });
        }

        self.social.follow(&follow).await?;
        Ok(follow)
    }

    /// Returns a page of users the acting user follows.
    ///
    /// # Errors
    ///
    /// Returns [`FollowServiceError::Social`] when the lookup fails.
    pub async fn following(
        &self,
        follower: UserId,
        request: PageRequest,
    ) -> FollowServiceResult<Page<UserId>> {
        Ok(self.social.page_following(follower, request).await?)
    }
}

/// Drains one precondition result, treating an exhausted group as a
/// failed check.
async fn next_check(
    checks: &mut OrderedTaskGroup<bool, FollowServiceError>,
) -> FollowServiceResult<bool> {
    match checks.next().await {
        Some(result) => result,
        None => Ok(false),
    }
}
