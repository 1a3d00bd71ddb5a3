//! Catalog domain module.
//!
//! Read-only reference data for booking: the treatments the clinic offers,
//! the practitioners qualified to perform them, and the daily slot template.

mod directory;
mod practitioner;
mod treatment;

pub use directory::BookingCatalog;
pub use practitioner::Practitioner;
pub use treatment::{TreatmentOption, MAX_TREATMENT_MINUTES};
