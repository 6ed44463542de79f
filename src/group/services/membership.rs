//! Service layer for group invitations and the invitation-to-membership
//! transition.

use crate::group::{
    domain::{GroupDomainError, GroupId, Invitation, InvitationId, Membership},
    ports::{GroupRepository, GroupRepositoryError},
};
use crate::sync::OrderedTaskGroup;
use crate::user::{
    domain::{Role, User, UserId},
    ports::{NotificationError, NotificationGateway, UserRepository, UserRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for inviting a user into a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteToGroupRequest {
    inviter: User,
    group_id: GroupId,
    invitee: UserId,
}

impl InviteToGroupRequest {
    /// Creates an invite request for an authenticated acting user.
    #[must_use]
    pub const fn new(inviter: User, group_id: GroupId, invitee: UserId) -> Self {
        Self {
            inviter,
            group_id,
            invitee,
        }
    }
}

/// Request payload for accepting a pending invitation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptInvitationRequest {
    invitation_id: InvitationId,
    user: User,
}

impl AcceptInvitationRequest {
    /// Creates an accept request for an authenticated acting user.
    #[must_use]
    pub const fn new(invitation_id: InvitationId, user: User) -> Self {
        Self {
            invitation_id,
            user,
        }
    }
}

/// Service-level errors for membership operations.
#[derive(Debug, Error)]
pub enum GroupMembershipError {
    /// Fans cannot invite users into groups.
    #[error("fans cannot invite users into a group")]
    FanCannotInvite,

    /// The inviter does not belong to the group.
    #[error("user {user} is not a member of group {group}")]
    InviterNotMember {
        /// Target group.
        group: GroupId,
        /// Acting user.
        user: UserId,
    },

    /// The group does not exist.
    #[error("group not found: {0}")]
    GroupNotFound(GroupId),

    /// The invited user does not exist.
    #[error("invitee not found: {0}")]
    InviteeNotFound(UserId),

    /// The user already belongs to the group.
    #[error("user {user} is already a member of group {group}")]
    AlreadyMember {
        /// Target group.
        group: GroupId,
        /// Existing member.
        user: UserId,
    },

    /// The invitation does not exist.
    #[error("invitation not found: {0}")]
    InvitationNotFound(InvitationId),

    /// The acting user is not the invited user.
    #[error("user {user} is not the invitee of invitation {invitation}")]
    NotInvitee {
        /// Invitation being accepted.
        invitation: InvitationId,
        /// Acting user.
        user: UserId,
    },

    /// The accepting user does not exist.
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] GroupDomainError),

    /// Group repository operation failed.
    #[error(transparent)]
    Group(#[from] GroupRepositoryError),

    /// User repository operation failed.
    #[error(transparent)]
    User(#[from] UserRepositoryError),

    /// Notification dispatch failed.
    #[error(transparent)]
    Notification(#[from] NotificationError),
}

/// Result type for membership service operations.
pub type GroupMembershipResult<T> = Result<T, GroupMembershipError>;

/// Invitation and membership orchestration service.
#[derive(Clone)]
pub struct GroupMembershipService<G, U, N, C>
where
    G: GroupRepository + 'static,
    U: UserRepository + 'static,
    N: NotificationGateway,
    C: Clock + Send + Sync,
{
    groups: Arc<G>,
    users: Arc<U>,
    notifier: Arc<N>,
    clock: Arc<C>,
}

impl<G, U, N, C> GroupMembershipService<G, U, N, C>
where
    G: GroupRepository + 'static,
    U: UserRepository + 'static,
    N: NotificationGateway,
    C: Clock + Send + Sync,
{
    /// Creates a new membership service.
    #[must_use]
    pub const fn new(groups: Arc<G>, users: Arc<U>, notifier: Arc<N>, clock: Arc<C>) -> Self {
        Self {
            groups,
            users,
            notifier,
            clock,
        }
    }

    /// Issues a pending invitation from an artist member to another user
    /// and notifies the invitee.
    ///
    /// The membership and existence checks run concurrently and are
    /// consumed in submission order, so the reported precondition failure
    /// is deterministic regardless of which read completes first.
    ///
    /// # Errors
    ///
    /// Returns [`GroupMembershipError::FanCannotInvite`] without touching
    /// storage when the acting user is a fan; otherwise the first failed
    /// precondition, or a repository/gateway error passed through
    /// unmodified.
    pub async fn invite(
        &self,
        request: InviteToGroupRequest,
    ) -> GroupMembershipResult<Invitation> {
        match request.inviter.role() {
            Role::Fan => {
                tracing::debug!(user = %request.inviter.id(), "invite rejected, fan role");
                return Err(GroupMembershipError::FanCannotInvite);
            }
            Role::Artist { .. } => {}
        }

        let inviter = request.inviter.id();
        let group = self
            .groups
            .find_by_id(request.group_id)
            .await?
            .ok_or(GroupMembershipError::GroupNotFound(request.group_id))?;
        let group_id = group.id();
        let invitee = request.invitee;

        let mut checks: OrderedTaskGroup<bool, GroupMembershipError> = OrderedTaskGroup::new();
        let inviter_groups = Arc::clone(&self.groups);
        checks.submit(async move { Ok(inviter_groups.is_member(group_id, inviter).await?) });
        let invitee_users = Arc::clone(&self.users);
        checks.submit(async move { Ok(invitee_users.exists(invitee).await?) });
        let member_groups = Arc::clone(&self.groups);
        checks.submit(async move { Ok(member_groups.is_member(group_id, invitee).await?) });

        let inviter_is_member = next_check(&mut checks).await?;
        let invitee_exists = next_check(&mut checks).await?;
        let invitee_is_member = next_check(&mut checks).await?;

        if !inviter_is_member {
            return Err(GroupMembershipError::InviterNotMember {
                group: group_id,
                user: inviter,
            });
        }
        if !invitee_exists {
            return Err(GroupMembershipError::InviteeNotFound(invitee));
        }
        if invitee_is_member {
            return Err(GroupMembershipError::AlreadyMember {
                group: group_id,
                user: invitee,
            });
        }

        let invitation = Invitation::new(group_id, invitee, &*self.clock);
        self.groups.invite(&invitation).await?;

        let message = format!("You have been invited to join {}", group.name());
        self.notifier.publish(invitee, &message).await?;
        Ok(invitation)
    }

    /// Accepts a pending invitation, creating the membership.
    ///
    /// Fires only when the invitation exists, is addressed to the acting
    /// user, the user exists, and the user is not already a member. The
    /// user-existence and membership checks run concurrently and are
    /// consumed in submission order.
    ///
    /// # Errors
    ///
    /// Returns the first failed precondition as a typed error,
    /// [`GroupMembershipError::Domain`] when the invitation was already
    /// accepted, or a repository error passed through unmodified.
    pub async fn accept_invitation(
        &self,
        request: AcceptInvitationRequest,
    ) -> GroupMembershipResult<Membership> {
        let user = request.user.id();
        let mut invitation = self
            .groups
            .find_invitation(request.invitation_id)
            .await?
            .ok_or(GroupMembershipError::InvitationNotFound(
                request.invitation_id,
            ))?;

        if invitation.invitee() != user {
            return Err(GroupMembershipError::NotInvitee {
                invitation: invitation.id(),
                user,
            });
        }
        let group_id = invitation.group_id();

        let mut checks: OrderedTaskGroup<bool, GroupMembershipError> = OrderedTaskGroup::new();
        let users = Arc::clone(&self.users);
        checks.submit(async move { Ok(users.exists(user).await?) });
        let groups = Arc::clone(&self.groups);
        checks.submit(async move { Ok(groups.is_member(group_id, user).await?) });

        let user_exists = next_check(&mut checks).await?;
        let already_member = next_check(&mut checks).await?;

        if !user_exists {
            return Err(GroupMembershipError::UserNotFound(user));
        }
        if already_member {
            return Err(GroupMembershipError::AlreadyMember {
                group: group_id,
                user,
            });
        }

        invitation.accept(&*self.clock)?;
        self.groups.update_invitation(&invitation).await?;

        let membership = Membership::new(group_id, user, &*self.clock);
        self.groups.join(&membership).await?;
        Ok(membership)
    }
}

/// Drains one precondition result, treating an exhausted group as a
/// failed check.
async fn next_check(
    checks: &mut OrderedTaskGroup<bool, GroupMembershipError>,
) -> GroupMembershipResult<bool> {
    match checks.next().await {
        Some(result) => result,
        None => Ok(false),
    }
}
