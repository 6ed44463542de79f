//! Domain model for musical groups, memberships, invitations, and group
//! feeds.
//!
//! The invitation state machine (`Pending` to `Accepted`, exactly once)
//! lives here; services orchestrate it but never bypass it.

mod error;
mod feed;
mod group;
mod invitation;
mod membership;

pub use error::{GroupDomainError, ParseInvitationStateError};
pub use feed::{FeedBody, FeedPost, FeedPostId};
pub use group::{Group, GroupId, GroupName};
pub use invitation::{Invitation, InvitationId, InvitationState};
pub use membership::Membership;
