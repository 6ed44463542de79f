//! Repository ports for user records and social follow edges.

use crate::pagination::{Page, PageRequest};
use crate::user::domain::{Follow, User, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user repository operations.
pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

/// User persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::DuplicateUser`] when the user ID
    /// already exists.
    async fn create(&self, user: &User) -> UserRepositoryResult<()>;

    /// Finds a user by identifier.
    ///
    /// Returns `None` when the user does not exist.
    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>>;

    /// Returns `true` when the user exists.
    async fn exists(&self, id: UserId) -> UserRepositoryResult<bool>;

    /// Returns a page of users together with the total user count.
    async fn page(&self, request: PageRequest) -> UserRepositoryResult<Page<User>>;
}

/// Errors returned by user repository implementations.
#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    /// A user with the same identifier already exists.
    #[error("duplicate user identifier: {0}")]
    DuplicateUser(UserId),

    /// The user was not found.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

/// Result type for social repository operations.
pub type UserSocialRepositoryResult<T> = Result<T, UserSocialRepositoryError>;

/// Social-graph persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserSocialRepository: Send + Sync {
    /// Stores a follow edge.
    ///
    /// # Errors
    ///
    /// Returns [`UserSocialRepositoryError::DuplicateFollow`] when the
    /// edge already exists.
    async fn follow(&self, follow: &Follow) -> UserSocialRepositoryResult<()>;

    /// Returns `true` when `follower` already follows `followee`.
    async fn is_following(
        &self,
        follower: UserId,
        followee: UserId,
    ) -> UserSocialRepositoryResult<bool>;

    /// Returns a page of users that `follower` follows, with the total
    /// followed count.
    async fn page_following(
        &self,
        follower: UserId,
        request: PageRequest,
    ) -> UserSocialRepositoryResult<Page<UserId>>;
}

/// Errors returned by social repository implementations.
#[derive(Debug, Clone, Error)]
pub enum UserSocialRepositoryError {
    /// The follow edge already exists.
    #[error("user {follower} already follows {followee}")]
    DuplicateFollow {
        /// Following user.
        follower: UserId,
        /// Followed user.
        followee: UserId,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserSocialRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
