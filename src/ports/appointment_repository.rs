//! Appointment repository port.
//!
//! Defines the contract for persisting and retrieving appointments.
//! Identifiers are numeric and handed out by the store itself.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::appointment::Appointment;
use crate::domain::foundation::{AppointmentId, DomainError, PractitionerId};

/// Repository port for appointment persistence.
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Reserve the next unused appointment id.
    async fn next_id(&self) -> Result<AppointmentId, DomainError>;

    /// Save a new appointment.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, appointment: &Appointment) -> Result<(), DomainError>;

    /// Update an existing appointment.
    ///
    /// # Errors
    ///
    /// - `AppointmentNotFound` if the appointment doesn't exist
    /// - `StorageError` on persistence failure
    async fn update(&self, appointment: &Appointment) -> Result<(), DomainError>;

    /// Find an appointment by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: AppointmentId) -> Result<Option<Appointment>, DomainError>;

    /// All appointments ordered by date, then start time.
    async fn list(&self) -> Result<Vec<Appointment>, DomainError>;

    /// Appointments booked with a practitioner on a given day.
    async fn find_by_practitioner_on(
        &self,
        practitioner_id: PractitionerId,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, DomainError>;
}
