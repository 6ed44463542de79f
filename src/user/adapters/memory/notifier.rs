//! In-memory notification gateway recording dispatched messages.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::user::{
    domain::{DeviceToken, UserId},
    ports::{NotificationError, NotificationGateway, NotificationResult},
};

/// In-memory notification gateway.
///
/// Records every publish and registration so tests can assert on
/// dispatched traffic instead of observing side effects.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationGateway {
    state: Arc<RwLock<GatewayState>>,
}

#[derive(Debug, Default)]
struct GatewayState {
    published: Vec<(UserId, String)>,
    registered: Vec<(UserId, DeviceToken)>,
}

impl InMemoryNotificationGateway {
    /// Creates an empty in-memory gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all published `(recipient, message)` pairs in dispatch
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::Delivery`] when the state lock is
    /// poisoned.
    pub fn published(&self) -> NotificationResult<Vec<(UserId, String)>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.published.clone())
    }

    /// Returns all registered `(user, token)` pairs in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::Delivery`] when the state lock is
    /// poisoned.
    pub fn registered(&self) -> NotificationResult<Vec<(UserId, DeviceToken)>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.registered.clone())
    }
}

fn lock_error(err: impl std::fmt::Display) -> NotificationError {
    NotificationError::delivery(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl NotificationGateway for InMemoryNotificationGateway {
    async fn publish(&self, to_user: UserId, message: &str) -> NotificationResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.published.push((to_user, message.to_owned()));
        Ok(())
    }

    async fn register(&self, user: UserId, device_token: &DeviceToken) -> NotificationResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.registered.push((user, device_token.clone()));
        Ok(())
    }
}
