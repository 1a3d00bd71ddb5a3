//! CreateAppointmentHandler - Command handler for booking new appointments.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::domain::appointment::{Appointment, AppointmentError, NewAppointment};
use crate::domain::foundation::{CommandMetadata, PatientId, PractitionerId, TimeOfDay, TreatmentId};
use crate::ports::{AppointmentRepository, ReferenceDirectory};

/// Command to create a new appointment.
///
/// Date and time are optional here so that a missing value is reported as a
/// validation failure rather than a decoding error.
#[derive(Debug, Clone, Default)]
pub struct CreateAppointmentCommand {
    pub patient_id: Option<PatientId>,
    pub patient_name: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<TimeOfDay>,
    pub appointment_type: Option<String>,
    pub treatment_id: Option<TreatmentId>,
    pub practitioner_id: Option<PractitionerId>,
    pub duration_minutes: Option<u32>,
    pub notes: Option<String>,
    pub is_urgent: bool,
}

/// Result of successful appointment creation.
#[derive(Debug, Clone)]
pub struct CreateAppointmentResult {
    pub appointment: Appointment,
}

/// Handler for creating appointments.
pub struct CreateAppointmentHandler {
    repository: Arc<dyn AppointmentRepository>,
    directory: Arc<dyn ReferenceDirectory>,
}

impl CreateAppointmentHandler {
    pub fn new(
        repository: Arc<dyn AppointmentRepository>,
        directory: Arc<dyn ReferenceDirectory>,
    ) -> Self {
        Self {
            repository,
            directory,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateAppointmentCommand,
        metadata: CommandMetadata,
    ) -> Result<CreateAppointmentResult, AppointmentError> {
        // 1. Required fields
        let (date, time) = match (cmd.date, cmd.time) {
            (Some(date), Some(time)) => (date, time),
            _ => return Err(AppointmentError::validation("date", "Date and time are required")),
        };

        // 2. Resolve treatment and practitioner against the catalog
        let catalog = self.directory.load_catalog().await?;

        let mut appointment_type = cmd.appointment_type.unwrap_or_default();
        let mut duration_minutes = cmd.duration_minutes;
        if let Some(treatment_id) = &cmd.treatment_id {
            let treatment = catalog.treatment(treatment_id).ok_or_else(|| {
                AppointmentError::validation(
                    "treatmentId",
                    format!("Unknown treatment '{}'", treatment_id),
                )
            })?;
            appointment_type = treatment.name().to_string();
            duration_minutes = Some(treatment.duration_minutes());
        }

        if let Some(practitioner_id) = cmd.practitioner_id {
            let practitioner = catalog.practitioner(practitioner_id).ok_or_else(|| {
                AppointmentError::validation(
                    "practitionerId",
                    format!("Unknown practitioner {}", practitioner_id),
                )
            })?;
            if let Some(treatment_id) = &cmd.treatment_id {
                if !practitioner.can_perform(treatment_id) {
                    return Err(AppointmentError::validation(
                        "practitionerId",
                        format!("{} does not perform {}", practitioner.name(), treatment_id),
                    ));
                }
            }
        }

        // 3. Build and validate details
        let mut details = NewAppointment::new(date, time, appointment_type);
        details.patient_id = cmd.patient_id;
        details.patient_name = cmd.patient_name;
        details.treatment_id = cmd.treatment_id;
        details.practitioner_id = cmd.practitioner_id;
        details.duration_minutes = duration_minutes;
        details.notes = cmd.notes.filter(|n| !n.trim().is_empty());
        details.is_urgent = cmd.is_urgent;
        details.validate()?;

        // 4. Reject overlapping bookings for the same practitioner
        if let Some(practitioner_id) = details.practitioner_id {
            let duration = details.effective_duration();
            let booked = self
                .repository
                .find_by_practitioner_on(practitioner_id, date)
                .await?;
            if let Some(existing) = booked.iter().find(|a| a.overlaps(date, time, duration)) {
                return Err(AppointmentError::conflict(format!(
                    "Practitioner {} is booked at {} on {}",
                    practitioner_id,
                    existing.time(),
                    date
                )));
            }
        }

        // 5. Persist
        let id = self.repository.next_id().await?;
        let appointment = Appointment::schedule(id, details);
        self.repository.save(&appointment).await?;

        info!(
            appointment_id = %appointment.id(),
            date = %appointment.date(),
            time = %appointment.time(),
            correlation_id = %metadata.correlation_id(),
            source = metadata.source().unwrap_or("unknown"),
            "Appointment created"
        );

        Ok(CreateAppointmentResult { appointment })
    }
}
