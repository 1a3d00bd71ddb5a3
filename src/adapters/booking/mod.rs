//! Booking submission adapters.
//!
//! - `DirectBookingSubmitter` - calls the create-appointment handler in process
//! - `HttpBookingSubmitter` - posts to a running booking service

mod direct_submitter;
mod http_submitter;

pub use direct_submitter::DirectBookingSubmitter;
pub use http_submitter::{HttpBookingSubmitter, HttpSubmitterConfig};
