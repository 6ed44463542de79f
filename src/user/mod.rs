//! Users, roles, and the social graph.
//!
//! Models authenticated platform users with a closed artist/fan role tag,
//! social follow edges, and push-notification device registration. The
//! module follows hexagonal architecture:
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
