//! Error types for user domain validation and parsing.

use super::UserId;
use thiserror::Error;

/// Errors returned while constructing user domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The user name is empty after trimming.
    #[error("user name must not be empty")]
    EmptyUserName,

    /// The device token is empty after trimming.
    #[error("device token must not be empty")]
    EmptyDeviceToken,

    /// A user attempted to follow themselves.
    #[error("user {0} cannot follow themselves")]
    SelfFollow(UserId),
}

/// Error returned while parsing role tags from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);
