//! Live events hosted by groups.
//!
//! Scheduling a live is artist-only and requires membership in the
//! hosting group; listings join each live with its host through the
//! ordered fan-out primitive. The module follows hexagonal architecture:
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
