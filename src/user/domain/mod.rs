//! Domain model for platform users and their social edges.
//!
//! Users carry a closed role tag distinguishing artists from fans; every
//! authorization gate matches on it exhaustively. Social follows are
//! modelled as validated value objects with no infrastructure concerns.

mod error;
mod follow;
mod ids;
mod user;

pub use error::{ParseRoleError, UserDomainError};
pub use follow::Follow;
pub use ids::{DeviceToken, UserId};
pub use user::{Part, Role, User, UserName};
