//! Application services for the user subsystem.
//!
//! Services orchestrate domain operations and coordinate between ports,
//! implementing precondition-gated workflows over the social graph and
//! device registration.

mod device;
mod social;

pub use device::{DeviceRegistrationService, RegisterDeviceError, RegisterDeviceRequest};
pub use social::{FollowService, FollowServiceError, FollowServiceResult, FollowUserRequest};
