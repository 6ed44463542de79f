//! Domain model for live events.

mod error;
mod live;

pub use error::LiveDomainError;
pub use live::{Live, LiveId, LiveTitle};
