//! Group membership value object.

use super::GroupId;
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A user's membership in a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    group_id: GroupId,
    user_id: UserId,
    joined_at: DateTime<Utc>,
}

impl Membership {
    /// Creates a membership effective at the current clock time.
    #[must_use]
    pub fn new(group_id: GroupId, user_id: UserId, clock: &impl Clock) -> Self {
        Self {
            group_id,
            user_id,
            joined_at: clock.utc(),
        }
    }

    /// Returns the group.
    #[must_use]
    pub const fn group_id(self) -> GroupId {
        self.group_id
    }

    /// Returns the member.
    #[must_use]
    pub const fn user_id(self) -> UserId {
        self.user_id
    }

    /// Returns when the membership became effective.
    #[must_use]
    pub const fn joined_at(self) -> DateTime<Utc> {
        self.joined_at
    }
}
