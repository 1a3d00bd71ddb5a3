//! Reference directory port.
//!
//! Read-only source of the treatments the clinic offers, the practitioners
//! who perform them, and the slot template used for every bookable day.

use async_trait::async_trait;

use crate::domain::catalog::{BookingCatalog, Practitioner, TreatmentOption};
use crate::domain::foundation::{DomainError, TimeOfDay};

/// Directory port consumed by booking flows and catalog endpoints.
#[async_trait]
pub trait ReferenceDirectory: Send + Sync {
    /// Treatments offered by the clinic.
    async fn list_treatments(&self) -> Result<Vec<TreatmentOption>, DomainError>;

    /// Every practitioner in the directory.
    async fn list_practitioners(&self) -> Result<Vec<Practitioner>, DomainError>;

    /// Start times offered on any bookable day.
    async fn slot_template(&self) -> Result<Vec<TimeOfDay>, DomainError>;

    /// Loads all three lists into one snapshot.
    async fn load_catalog(&self) -> Result<BookingCatalog, DomainError> {
        Ok(BookingCatalog::new(
            self.list_treatments().await?,
            self.list_practitioners().await?,
            self.slot_template().await?,
        ))
    }
}
