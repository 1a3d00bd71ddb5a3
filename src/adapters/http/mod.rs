//! HTTP adapters - REST API implementations.
//!
//! Each resource has its own adapter (dto, handlers, routes). Failures use
//! the shared `{ success: false, code, message }` envelope.

pub mod appointment;
pub mod catalog;
pub mod error;
pub mod params;
pub mod router;
pub mod treatment;

pub use error::ErrorResponse;
pub use router::{api_router, with_http_layers, ApiServices};
