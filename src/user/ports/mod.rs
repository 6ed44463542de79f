//! Port contracts for user persistence, social edges, and notification
//! dispatch.
//!
//! Ports define infrastructure-agnostic interfaces used by user services.

pub mod notifier;
pub mod repository;

pub use notifier::{NotificationError, NotificationGateway, NotificationResult};
pub use repository::{
    UserRepository, UserRepositoryError, UserRepositoryResult, UserSocialRepository,
    UserSocialRepositoryError, UserSocialRepositoryResult,
};
