//! In-process booking submitter.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::handlers::appointment::{CreateAppointmentCommand, CreateAppointmentHandler};
use crate::domain::appointment::Appointment;
use crate::domain::booking::{BookingRequest, SubmissionError};
use crate::domain::foundation::CommandMetadata;
use crate::ports::BookingSubmitter;

/// Submits bookings straight to [`CreateAppointmentHandler`], for a wizard
/// hosted in the same process as the appointment store.
pub struct DirectBookingSubmitter {
    handler: Arc<CreateAppointmentHandler>,
}

impl DirectBookingSubmitter {
    pub fn new(handler: Arc<CreateAppointmentHandler>) -> Self {
        Self { handler }
    }
}

#[async_trait]
impl BookingSubmitter for DirectBookingSubmitter {
    async fn submit(&self, request: &BookingRequest) -> Result<Appointment, SubmissionError> {
        let cmd = CreateAppointmentCommand {
            patient_id: request.patient.as_ref().map(|p| p.patient_id.clone()),
            patient_name: request.patient.as_ref().map(|p| p.patient_name.clone()),
            date: Some(request.date),
            time: Some(request.time),
            appointment_type: None,
            treatment_id: Some(request.treatment_id.clone()),
            practitioner_id: Some(request.practitioner_id),
            duration_minutes: Some(request.duration_minutes),
            notes: Some(request.notes.clone()),
            is_urgent: request.is_urgent,
        };
        let metadata = CommandMetadata::new().with_source("booking-wizard");

        let result = self.handler.handle(cmd, metadata).await?;
        Ok(result.appointment)
    }
}
