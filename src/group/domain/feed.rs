//! Artist-authored group feed posts.

use super::{GroupDomainError, GroupId};
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a feed post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedPostId(Uuid);

impl FeedPostId {
    /// Creates a new random feed post identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for FeedPostId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FeedPostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated feed post body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedBody(String);

impl FeedBody {
    /// Creates a validated post body.
    ///
    /// # Errors
    ///
    /// Returns [`GroupDomainError::EmptyFeedBody`] when the body is empty
    /// after trimming.
    pub fn new(body: impl Into<String>) -> Result<Self, GroupDomainError> {
        let value = body.into();
        if value.trim().is_empty() {
            return Err(GroupDomainError::EmptyFeedBody);
        }
        Ok(Self(value))
    }

    /// Returns the body text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A post on a group's feed, authored by one of its artists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedPost {
    id: FeedPostId,
    group_id: GroupId,
    author: UserId,
    body: FeedBody,
    created_at: DateTime<Utc>,
}

impl FeedPost {
    /// Creates a feed post.
    #[must_use]
    pub fn new(group_id: GroupId, author: UserId, body: FeedBody, clock: &impl Clock) -> Self {
        Self {
            id: FeedPostId::new(),
            group_id,
            author,
            body,
            created_at: clock.utc(),
        }
    }

    /// Returns the post identifier.
    #[must_use]
    pub const fn id(&self) -> FeedPostId {
        self.id
    }

    /// Returns the owning group.
    #[must_use]
    pub const fn group_id(&self) -> GroupId {
        self.group_id
    }

    /// Returns the authoring artist.
    #[must_use]
    pub const fn author(&self) -> UserId {
        self.author
    }

    /// Returns the post body.
    #[must_use]
    pub const fn body(&self) -> &FeedBody {
        &self.body
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
