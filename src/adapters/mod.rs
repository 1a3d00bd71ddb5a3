//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-process stores and the static clinic directory
//! - `booking` - Booking submitters (in-process and HTTP)
//! - `http` - REST API (axum)

pub mod booking;
pub mod http;
pub mod memory;

pub use booking::{DirectBookingSubmitter, HttpBookingSubmitter, HttpSubmitterConfig};
pub use http::{api_router, with_http_layers, ApiServices};
pub use memory::{InMemoryAppointmentStore, InMemoryTreatmentProgramStore, StaticReferenceDirectory};
