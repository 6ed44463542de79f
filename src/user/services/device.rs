//! Service layer for push-notification device registration.

use crate::user::{
    domain::{DeviceToken, UserId},
    ports::{NotificationError, NotificationGateway, UserRepository, UserRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for registering a device token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterDeviceRequest {
    user: UserId,
    device_token: DeviceToken,
}

impl RegisterDeviceRequest {
    /// Creates a registration request.
    #[must_use]
    pub const fn new(user: UserId, device_token: DeviceToken) -> Self {
        Self { user, device_token }
    }
}

/// Service-level errors for device registration.
#[derive(Debug, Error)]
pub enum RegisterDeviceError {
    /// The registering user does not exist.
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    /// User repository operation failed.
    #[error(transparent)]
    User(#[from] UserRepositoryError),

    /// Notification gateway operation failed.
    #[error(transparent)]
    Notification(#[from] NotificationError),
}

/// Device registration orchestration service.
#[derive(Clone)]
pub struct DeviceRegistrationService<U, N>
where
    U: UserRepository,
    N: NotificationGateway,
{
    users: Arc<U>,
    notifier: Arc<N>,
}

impl<U, N> DeviceRegistrationService<U, N>
where
    U: UserRepository,
    N: NotificationGateway,
{
    /// Creates a new device registration service.
    #[must_use]
    pub const fn new(users: Arc<U>, notifier: Arc<N>) -> Self {
        Self { users, notifier }
    }

    /// Registers a device token with the notification gateway.
    ///
    /// # Errors
    ///
    /// Returns [`RegisterDeviceError::UserNotFound`] when the user does
    /// not exist, or a repository/gateway error passed through
    /// unmodified.
    pub async fn register(&self, request: RegisterDeviceRequest) -> Result<(), RegisterDeviceError> {
        if !self.users.exists(request.user).await? {
            tracing::debug!(user = %request.user, "registration rejected, unknown user");
            return Err(RegisterDeviceError::UserNotFound(request.user));
        }
        self.notifier
            .register(request.user, &request.device_token)
            .await?;
        Ok(())
    }
}
