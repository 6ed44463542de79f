//! Thread-safe in-memory adapters for the user ports.
//!
//! These back the behavioural tests; production deployments substitute
//! relational and provider-backed implementations.

mod notifier;
mod social;
mod user;

pub use notifier::InMemoryNotificationGateway;
pub use social::InMemoryUserSocialRepository;
pub use user::InMemoryUserRepository;
