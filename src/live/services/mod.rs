//! Application services for the live subsystem.

mod listing;
mod schedule;

pub use listing::{LiveListingError, LiveListingResult, LiveListingService, LiveWithHost};
pub use schedule::{
    CreateLiveRequest, CreateLiveService, LiveScheduleError, LiveScheduleResult,
};
