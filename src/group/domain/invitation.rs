//! Group invitation aggregate and its state machine.

use super::{GroupDomainError, GroupId, ParseInvitationStateError};
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a group invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvitationId(Uuid);

impl InvitationId {
    /// Creates a new random invitation identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an invitation identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for InvitationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InvitationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Invitation lifecycle state.
///
/// `Accepted` is terminal; invitations are not revocable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvitationState {
    /// Invitation issued, membership not yet created.
    Pending,
    /// Invitation accepted and membership created.
    Accepted,
}

impl InvitationState {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
        }
    }
}

impl TryFrom<&str> for InvitationState {
    type Error = ParseInvitationStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            _ => Err(ParseInvitationStateError(value.to_owned())),
        }
    }
}

/// Group invitation aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invitation {
    id: InvitationId,
    group_id: GroupId,
    invitee: UserId,
    state: InvitationState,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Invitation {
    /// Creates a pending invitation.
    #[must_use]
    pub fn new(group_id: GroupId, invitee: UserId, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: InvitationId::new(),
            group_id,
            invitee,
            state: InvitationState::Pending,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the invitation identifier.
    #[must_use]
    pub const fn id(&self) -> InvitationId {
        self.id
    }

    /// Returns the inviting group.
    #[must_use]
    pub const fn group_id(&self) -> GroupId {
        self.group_id
    }

    /// Returns the invited user.
    #[must_use]
    pub const fn invitee(&self) -> UserId {
        self.invitee
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn state(&self) -> InvitationState {
        self.state
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Transitions the invitation from `Pending` to `Accepted`.
    ///
    /// # Errors
    ///
    /// Returns [`GroupDomainError::InvitationAlreadyAccepted`] when the
    /// invitation has already been accepted.
    pub fn accept(&mut self, clock: &impl Clock) -> Result<(), GroupDomainError> {
        match self.state {
            InvitationState::Accepted => Err(GroupDomainError::InvitationAlreadyAccepted(self.id)),
            InvitationState::Pending => {
                self.state = InvitationState::Accepted;
                self.updated_at = clock.utc();
                Ok(())
            }
        }
    }
}
