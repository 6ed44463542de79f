//! Greenroom: community platform backend core.
//!
//! This crate provides the use-case orchestration layer for a platform
//! connecting musical groups, their artist members, fans, and live
//! events, together with the ordered fan-out concurrency primitive the
//! services are built on.
//!
//! # Architecture
//!
//! Greenroom follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory here;
//!   relational and provider-backed implementations live outside the core)
//!
//! # Modules
//!
//! - [`sync`]: Ordered task group and its priority-queue reordering buffer
//! - [`user`]: Users, the closed artist/fan role model, and the social graph
//! - [`group`]: Groups, memberships, invitations, and feeds
//! - [`live`]: Live events and host-joined listings
//! - [`pagination`]: Shared page/request types for repository listings

pub mod group;
pub mod live;
pub mod pagination;
pub mod sync;
pub mod user;
