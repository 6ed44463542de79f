//! Live event aggregate root.

use super::LiveDomainError;
use crate::group::domain::GroupId;
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a live event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LiveId(Uuid);

impl LiveId {
    /// Creates a new random live identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a live identifier from an existing UUID.
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

impl Default for LiveId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LiveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated title for a live event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LiveTitle(String);

impl LiveTitle {
    /// Creates a validated live title.
    ///
    /// # Errors
    ///
    /// Returns [`LiveDomainError::EmptyLiveTitle`] when the title is
    /// empty after trimming.
    pub fn new(title: impl Into<String>) -> Result<Self, LiveDomainError> {
        let value = title.into();
        if value.trim().is_empty() {
            return Err(LiveDomainError::EmptyLiveTitle);
        }
        Ok(Self(value))
    }

    /// Returns the title text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LiveTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Live event aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Live {
    id: LiveId,
    title: LiveTitle,
    host_group: GroupId,
    author: UserId,
    starts_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl Live {
    /// Creates a new live event with a fresh identifier.
    #[must_use]
    pub fn new(
        title: LiveTitle,
        host_group: GroupId,
        author: UserId,
        starts_at: DateTime<Utc>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: LiveId::new(),
            title,
            host_group,
            author,
            starts_at,
            created_at: clock.utc(),
        }
    }

    /// Returns the live identifier.
    #[must_use]
    pub const fn id(&self) -> LiveId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &LiveTitle {
        &self.title
    }

    /// Returns the hosting group.
    #[must_use]
    pub const fn host_group(&self) -> GroupId {
        self.host_group
    }

    /// Returns the artist who scheduled the live.
    #[must_use]
    pub const fn author(&self) -> UserId {
        self.author
    }

    /// Returns the scheduled start time.
    #[must_use]
    pub const fn starts_at(&self) -> DateTime<Utc> {
        self.starts_at
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
