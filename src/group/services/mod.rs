//! Application services for the group subsystem.
//!
//! Services implement the fixed orchestration shape: role gate, then
//! precondition reads (fanned out through the ordered task group when
//! several independent checks combine), then exactly one mutation.

mod feed;
mod membership;

pub use feed::{CreateFeedPostRequest, GroupFeedError, GroupFeedResult, GroupFeedService};
pub use membership::{
    AcceptInvitationRequest, GroupMembershipError, GroupMembershipResult, GroupMembershipService,
    InviteToGroupRequest,
};
