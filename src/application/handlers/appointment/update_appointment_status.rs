//! UpdateAppointmentStatusHandler - Command handler for status changes.

use std::sync::Arc;

use tracing::info;

use crate::domain::appointment::{Appointment, AppointmentError, AppointmentStatus};
use crate::domain::foundation::{AppointmentId, CommandMetadata};
use crate::ports::AppointmentRepository;

/// Command to move an appointment to a new status.
#[derive(Debug, Clone)]
pub struct UpdateAppointmentStatusCommand {
    pub appointment_id: AppointmentId,
    pub status: AppointmentStatus,
}

/// Result of a successful status change.
#[derive(Debug, Clone)]
pub struct UpdateAppointmentStatusResult {
    pub appointment: Appointment,
    pub previous_status: AppointmentStatus,
}

/// Handler for appointment status changes.
pub struct UpdateAppointmentStatusHandler {
    repository: Arc<dyn AppointmentRepository>,
}

impl UpdateAppointmentStatusHandler {
    pub fn new(repository: Arc<dyn AppointmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: UpdateAppointmentStatusCommand,
        metadata: CommandMetadata,
    ) -> Result<UpdateAppointmentStatusResult, AppointmentError> {
        let mut appointment = self
            .repository
            .find_by_id(cmd.appointment_id)
            .await?
            .ok_or_else(|| AppointmentError::not_found(cmd.appointment_id))?;

        let previous_status = appointment.transition_to(cmd.status).map_err(|_| {
            AppointmentError::invalid_state(format!(
                "Cannot move appointment {} from {} to {}",
                cmd.appointment_id,
                appointment.status(),
                cmd.status
            ))
        })?;

        self.repository.update(&appointment).await?;

        info!(
            appointment_id = %cmd.appointment_id,
            from = %previous_status,
            to = %cmd.status,
            correlation_id = %metadata.correlation_id(),
            "Appointment status changed"
        );

        Ok(UpdateAppointmentStatusResult {
            appointment,
            previous_status,
        })
    }
}
