//! Push-notification dispatch port.
//!
//! Delivery mechanics (provider integration, retry, batching) live behind
//! this boundary and are out of scope for the core.

use crate::user::domain::{DeviceToken, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for notification gateway operations.
pub type NotificationResult<T> = Result<T, NotificationError>;

/// Notification dispatch contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Publishes a message to a user's registered devices.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::Delivery`] when the downstream
    /// dispatcher rejects the message.
    async fn publish(&self, to_user: UserId, message: &str) -> NotificationResult<()>;

    /// Registers a device token for a user.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::Delivery`] when the downstream
    /// dispatcher rejects the registration.
    async fn register(&self, user: UserId, device_token: &DeviceToken) -> NotificationResult<()>;
}

/// Errors returned by notification gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    /// Downstream dispatch failure.
    #[error("notification delivery error: {0}")]
    Delivery(Arc<dyn std::error::Error + Send + Sync>),
}

impl NotificationError {
    /// Wraps a delivery error.
    pub fn delivery(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Delivery(Arc::new(err))
    }
}
