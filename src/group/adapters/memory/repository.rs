//! In-memory group repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::group::{
    domain::{FeedPost, Group, GroupId, Invitation, InvitationId, Membership},
    ports::{GroupRepository, GroupRepositoryError, GroupRepositoryResult},
};
use crate::pagination::{Page, PageRequest};
use crate::user::domain::UserId;

/// Thread-safe in-memory group repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGroupRepository {
    state: Arc<RwLock<InMemoryGroupState>>,
}

#[derive(Debug, Default)]
struct InMemoryGroupState {
    groups: HashMap<GroupId, Group>,
    insertion_order: Vec<GroupId>,
    // group -> members, in join order
    members: HashMap<GroupId, Vec<UserId>>,
    invitations: HashMap<InvitationId, Invitation>,
    // group -> posts, newest last
    feeds: HashMap<GroupId, Vec<FeedPost>>,
}

impl InMemoryGroupRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all feed posts for a group, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`GroupRepositoryError::Persistence`] when the state lock
    /// is poisoned.
    pub fn feed_posts(&self, group: GroupId) -> GroupRepositoryResult<Vec<FeedPost>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.feeds.get(&group).cloned().unwrap_or_default())
    }
}

fn lock_error(err: impl std::fmt::Display) -> GroupRepositoryError {
    GroupRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl GroupRepository for InMemoryGroupRepository {
    async fn create(&self, group: &Group) -> GroupRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.groups.contains_key(&group.id()) {
            return Err(GroupRepositoryError::DuplicateGroup(group.id()));
        }
        state.insertion_order.push(group.id());
        state.groups.insert(group.id(), group.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: GroupId) -> GroupRepositoryResult<Option<Group>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.groups.get(&id).cloned())
    }

    async fn exists(&self, id: GroupId) -> GroupRepositoryResult<bool> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.groups.contains_key(&id))
    }

    async fn page(&self, request: PageRequest) -> GroupRepositoryResult<Page<Group>> {
        let state = self.state.read().map_err(lock_error)?;
        let ordered: Vec<Group> = state
            .insertion_order
            .iter()
            .filter_map(|id| state.groups.get(id).cloned())
            .collect();
        Ok(Page::from_slice(&ordered, request))
    }

    async fn is_member(&self, group: GroupId, user: UserId) -> GroupRepositoryResult<bool> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .members
            .get(&group)
            .is_some_and(|members| members.contains(&user)))
    }

    async fn join(&self, membership: &Membership) -> GroupRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if !state.groups.contains_key(&membership.group_id()) {
            return Err(GroupRepositoryError::GroupNotFound(membership.group_id()));
        }
        let members = state.members.entry(membership.group_id()).or_default();
        if members.contains(&membership.user_id()) {
            return Err(GroupRepositoryError::DuplicateMembership {
                group: membership.group_id(),
                user: membership.user_id(),
            });
        }
        members.push(membership.user_id());
        Ok(())
    }

    async fn page_members(
        &self,
        group: GroupId,
        request: PageRequest,
    ) -> GroupRepositoryResult<Page<UserId>> {
        let state = self.state.read().map_err(lock_error)?;
        let members = state
            .members
            .get(&group)
            .map(Vec::as_slice)
            .unwrap_or_default();
        Ok(Page::from_slice(members, request))
    }

    async fn invite(&self, invitation: &Invitation) -> GroupRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.invitations.contains_key(&invitation.id()) {
            return Err(GroupRepositoryError::DuplicateInvitation(invitation.id()));
        }
        state.invitations.insert(invitation.id(), invitation.clone());
        Ok(())
    }

    async fn find_invitation(
        &self,
        id: InvitationId,
    ) -> GroupRepositoryResult<Option<Invitation>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.invitations.get(&id).cloned())
    }

    async fn update_invitation(&self, invitation: &Invitation) -> GroupRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if !state.invitations.contains_key(&invitation.id()) {
            return Err(GroupRepositoryError::InvitationNotFound(invitation.id()));
        }
        state.invitations.insert(invitation.id(), invitation.clone());
        Ok(())
    }

    async fn create_feed_post(&self, post: &FeedPost) -> GroupRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if !state.groups.contains_key(&post.group_id()) {
            return Err(GroupRepositoryError::GroupNotFound(post.group_id()));
        }
        state.feeds.entry(post.group_id()).or_default().push(post.clone());
        Ok(())
    }
}
