//! User aggregate root and the closed artist/fan role model.

use super::{ParseRoleError, UserDomainError, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Part an artist plays within a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Part {
    /// Lead or backing vocals.
    Vocal,
    /// Guitar.
    Guitar,
    /// Bass guitar.
    Bass,
    /// Drums and percussion.
    Drums,
    /// Keyboard, piano, or synthesizer.
    Keyboard,
    /// Any part not covered by the named variants.
    Other,
}

impl Part {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vocal => "vocal",
            Self::Guitar => "guitar",
            Self::Bass => "bass",
            Self::Drums => "drums",
            Self::Keyboard => "keyboard",
            Self::Other => "other",
        }
    }
}

/// Closed role tag carried by every user.
///
/// Authorization gates match on this exhaustively; adding a role variant
/// forces every gate to be revisited at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Role {
    /// A performing artist, with the part they play.
    Artist {
        /// Part the artist plays.
        part: Part,
    },
    /// A fan with no performance privileges.
    Fan,
}

impl Role {
    /// Returns `true` for artist roles.
    #[must_use]
    pub const fn is_artist(self) -> bool {
        matches!(self, Self::Artist { .. })
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "artist" => Ok(Self::Artist { part: Part::Other }),
            "fan" => Ok(Self::Fan),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

/// Validated display name for a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    /// Creates a validated user name.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyUserName`] when the name is empty
    /// after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, UserDomainError> {
        let value = name.into();
        if value.trim().is_empty() {
            return Err(UserDomainError::EmptyUserName);
        }
        Ok(Self(value))
    }

    /// Returns the name text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User aggregate root.
///
/// Values of this type arrive already authenticated; the core never
/// verifies credentials itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: UserName,
    role: Role,
    created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with a fresh identifier.
    #[must_use]
    pub fn new(name: UserName, role: Role, clock: &impl Clock) -> Self {
        Self {
            id: UserId::new(),
            name,
            role,
            created_at: clock.utc(),
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &UserName {
        &self.name
    }

    /// Returns the role tag.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
