//! Social follow edge between two users.

use super::{UserDomainError, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Directed follow edge from one user to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Follow {
    follower: UserId,
    followee: UserId,
    followed_at: DateTime<Utc>,
}

impl Follow {
    /// Creates a follow edge.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::SelfFollow`] when follower and followee
    /// are the same user.
    pub fn new(
        follower: UserId,
        followee: UserId,
        clock: &impl Clock,
    ) -> Result<Self, UserDomainError> {
        if follower == followee {
            return Err(UserDomainError::SelfFollow(follower));
        }
        Ok(Self {
            follower,
            followee,
            followed_at: clock.utc(),
        })
    }

    /// Returns the following user.
    #[must_use]
    pub const fn follower(self) -> UserId {
        self.follower
    }

    /// Returns the followed user.
    #[must_use]
    pub const fn followee(self) -> UserId {
        self.followee
    }

    /// Returns when the edge was created.
    #[must_use]
    pub const fn followed_at(self) -> DateTime<Utc> {
        self.followed_at
    }
}
