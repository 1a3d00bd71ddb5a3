//! Booking submitter port.
//!
//! The operation a booking wizard calls once the patient confirms. It may be
//! slow and may fail for reasons outside the wizard's control (network,
//! server-side validation, a slot taken in the meantime).

use async_trait::async_trait;

use crate::domain::appointment::Appointment;
use crate::domain::booking::{BookingRequest, SubmissionError};

/// Port for creating an appointment from a confirmed booking.
#[async_trait]
pub trait BookingSubmitter: Send + Sync {
    /// Creates the appointment and returns the stored record.
    async fn submit(&self, request: &BookingRequest) -> Result<Appointment, SubmissionError>;
}
