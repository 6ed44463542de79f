//! Musical groups, memberships, invitations, and feeds.
//!
//! Implements the invitation-to-membership transition: a pending
//! invitation becomes a membership only when the invitation exists, is
//! addressed to the accepting user, the user exists, and the user is not
//! already a member. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
