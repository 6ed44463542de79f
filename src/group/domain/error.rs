//! Error types for group domain validation and parsing.

use super::InvitationId;
use thiserror::Error;

/// Errors returned while constructing or transitioning group domain
/// values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GroupDomainError {
    /// The group name is empty after trimming.
    #[error("group name must not be empty")]
    EmptyGroupName,

    /// The feed post body is empty after trimming.
    #[error("feed post body must not be empty")]
    EmptyFeedBody,

    /// The invitation has already been accepted.
    #[error("invitation already accepted: {0}")]
    InvitationAlreadyAccepted(InvitationId),
}

/// Error returned while parsing invitation states from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown invitation state: {0}")]
pub struct ParseInvitationStateError(pub String);
