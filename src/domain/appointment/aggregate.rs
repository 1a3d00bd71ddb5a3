//! Appointment aggregate.
//!
//! An appointment is one booked session at a date and start time, optionally
//! tied to a treatment and practitioner from the catalog.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    AppointmentId, PatientId, PractitionerId, StateMachine, TimeOfDay, Timestamp, TreatmentId,
    ValidationError,
};

use super::AppointmentStatus;

/// Length assumed for appointments booked without a treatment duration.
pub const DEFAULT_APPOINTMENT_MINUTES: u32 = 60;

/// Longest bookable session: one full day.
pub const MAX_APPOINTMENT_MINUTES: u32 = 24 * 60;

/// Maximum length for free-text notes.
pub const MAX_NOTES_LENGTH: usize = 2000;

/// Validated details of an appointment that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub patient_id: Option<PatientId>,
    pub patient_name: Option<String>,
    pub date: NaiveDate,
    pub time: TimeOfDay,
    pub appointment_type: String,
    pub treatment_id: Option<TreatmentId>,
    pub practitioner_id: Option<PractitionerId>,
    pub duration_minutes: Option<u32>,
    pub notes: Option<String>,
    pub is_urgent: bool,
}

impl NewAppointment {
    /// Creates the minimal details: a date, a start time and a display type.
    pub fn new(date: NaiveDate, time: TimeOfDay, appointment_type: impl Into<String>) -> Self {
        Self {
            patient_id: None,
            patient_name: None,
            date,
            time,
            appointment_type: appointment_type.into(),
            treatment_id: None,
            practitioner_id: None,
            duration_minutes: None,
            notes: None,
            is_urgent: false,
        }
    }

    /// Checks field-level constraints.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the type is blank
    /// - `OutOfRange` if the duration is zero, longer than a day, or the notes
    ///   are too long
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.appointment_type.trim().is_empty() {
            return Err(ValidationError::empty_field("type"));
        }
        if let Some(minutes) = self.duration_minutes {
            if minutes == 0 || minutes > MAX_APPOINTMENT_MINUTES {
                return Err(ValidationError::out_of_range(
                    "duration",
                    1,
                    MAX_APPOINTMENT_MINUTES as i32,
                    i32::try_from(minutes).unwrap_or(i32::MAX),
                ));
            }
        }
        if let Some(notes) = &self.notes {
            if notes.len() > MAX_NOTES_LENGTH {
                return Err(ValidationError::out_of_range(
                    "notes",
                    0,
                    MAX_NOTES_LENGTH as i32,
                    notes.len() as i32,
                ));
            }
        }
        Ok(())
    }
}

impl NewAppointment {
    /// Session length, falling back to [`DEFAULT_APPOINTMENT_MINUTES`].
    pub fn effective_duration(&self) -> u32 {
        self.duration_minutes.unwrap_or(DEFAULT_APPOINTMENT_MINUTES)
    }
}

/// A booked appointment.
///
/// # Invariants
///
/// - `id` is unique within the store that assigned it
/// - status changes follow [`AppointmentStatus`] transitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    id: AppointmentId,
    status: AppointmentStatus,
    #[serde(flatten)]
    details: NewAppointment,
    created_at: Timestamp,
}

impl Appointment {
    /// Schedules a new appointment. Status always starts as `Scheduled`.
    pub fn schedule(id: AppointmentId, details: NewAppointment) -> Self {
        Self {
            id,
            status: AppointmentStatus::Scheduled,
            details,
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitutes an appointment from storage or a remote record.
    pub fn reconstitute(
        id: AppointmentId,
        status: AppointmentStatus,
        details: NewAppointment,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            status,
            details,
            created_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> AppointmentId {
        self.id
    }

    pub fn status(&self) -> AppointmentStatus {
        self.status
    }

    pub fn details(&self) -> &NewAppointment {
        &self.details
    }

    pub fn date(&self) -> NaiveDate {
        self.details.date
    }

    pub fn time(&self) -> TimeOfDay {
        self.details.time
    }

    pub fn practitioner_id(&self) -> Option<PractitionerId> {
        self.details.practitioner_id
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Session length, falling back to [`DEFAULT_APPOINTMENT_MINUTES`].
    pub fn effective_duration(&self) -> u32 {
        self.details.effective_duration()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Scheduling
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns true if this appointment still holds its slot and its time
    /// window intersects `[time, time + duration)` on `date`.
    pub fn overlaps(&self, date: NaiveDate, time: TimeOfDay, duration_minutes: u32) -> bool {
        if !self.status.holds_slot() || self.details.date != date {
            return false;
        }
        let own_start = self.details.time.minutes_since_midnight();
        let own_end = own_start.saturating_add(self.effective_duration());
        let start = time.minutes_since_midnight();
        let end = start.saturating_add(duration_minutes);
        start < own_end && own_start < end
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Moves the appointment to a new status.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` on `state_transition` if the move is not allowed
    pub fn transition_to(&mut self, target: AppointmentStatus) -> Result<AppointmentStatus, ValidationError> {
        let previous = self.status;
        self.status = self.status.transition_to(target)?;
        Ok(previous)
    }
}
