//! Repository port for group persistence, membership, invitations, and
//! feeds.

use crate::group::domain::{FeedPost, Group, GroupId, Invitation, InvitationId, Membership};
use crate::pagination::{Page, PageRequest};
use crate::user::domain::UserId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for group repository operations.
pub type GroupRepositoryResult<T> = Result<T, GroupRepositoryError>;

/// Group persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Stores a new group.
    ///
    /// # Errors
    ///
    /// Returns [`GroupRepositoryError::DuplicateGroup`] when the group ID
    /// already exists.
    async fn create(&self, group: &Group) -> GroupRepositoryResult<()>;

    /// Finds a group by identifier.
    ///
    /// Returns `None` when the group does not exist.
    async fn find_by_id(&self, id: GroupId) -> GroupRepositoryResult<Option<Group>>;

    /// Returns `true` when the group exists.
    async fn exists(&self, id: GroupId) -> GroupRepositoryResult<bool>;

    /// Returns a page of groups together with the total group count.
    async fn page(&self, request: PageRequest) -> GroupRepositoryResult<Page<Group>>;

    /// Returns `true` when `user` is a member of `group`.
    async fn is_member(&self, group: GroupId, user: UserId) -> GroupRepositoryResult<bool>;

    /// Stores a membership.
    ///
    /// # Errors
    ///
    /// Returns [`GroupRepositoryError::GroupNotFound`] when the group
    /// does not exist, or [`GroupRepositoryError::DuplicateMembership`]
    /// when the user is already a member.
    async fn join(&self, membership: &Membership) -> GroupRepositoryResult<()>;

    /// Returns a page of member identifiers for `group`, with the total
    /// member count.
    async fn page_members(
        &self,
        group: GroupId,
        request: PageRequest,
    ) -> GroupRepositoryResult<Page<UserId>>;

    /// Stores a new invitation.
    ///
    /// # Errors
    ///
    /// Returns [`GroupRepositoryError::DuplicateInvitation`] when the
    /// invitation ID already exists.
    async fn invite(&self, invitation: &Invitation) -> GroupRepositoryResult<()>;

    /// Finds an invitation by identifier.
    ///
    /// Returns `None` when the invitation does not exist.
    async fn find_invitation(
        &self,
        id: InvitationId,
    ) -> GroupRepositoryResult<Option<Invitation>>;

    /// Persists changes to an existing invitation (state, timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`GroupRepositoryError::InvitationNotFound`] when the
    /// invitation does not exist.
    async fn update_invitation(&self, invitation: &Invitation) -> GroupRepositoryResult<()>;

    /// Stores a feed post.
    ///
    /// # Errors
    ///
    /// Returns [`GroupRepositoryError::GroupNotFound`] when the group
    /// does not exist.
    async fn create_feed_post(&self, post: &FeedPost) -> GroupRepositoryResult<()>;
}

/// Errors returned by group repository implementations.
#[derive(Debug, Clone, Error)]
pub enum GroupRepositoryError {
    /// A group with the same identifier already exists.
    #[error("duplicate group identifier: {0}")]
    DuplicateGroup(GroupId),

    /// The group was not found.
    #[error("group not found: {0}")]
    GroupNotFound(GroupId),

    /// The user is already a member of the group.
    #[error("user {user} is already a member of group {group}")]
    DuplicateMembership {
        /// Target group.
        group: GroupId,
        /// Existing member.
        user: UserId,
    },

    /// An invitation with the same identifier already exists.
    #[error("duplicate invitation identifier: {0}")]
    DuplicateInvitation(InvitationId),

    /// The invitation was not found.
    #[error("invitation not found: {0}")]
    InvitationNotFound(InvitationId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl GroupRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
