//! BookingRequest - the payload handed to the booking-submission operation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::appointment::NewAppointment;
use crate::domain::foundation::{PatientId, PractitionerId, TimeOfDay, TreatmentId};

use super::BookingDraft;

/// Who the booking is for. Optional: anonymous drafts are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRef {
    pub patient_id: PatientId,
    pub patient_name: String,
}

/// A complete draft, ready to submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub treatment_id: TreatmentId,
    pub practitioner_id: PractitionerId,
    pub date: NaiveDate,
    pub time: TimeOfDay,
    pub duration_minutes: u32,
    pub notes: String,
    pub is_urgent: bool,
    pub patient: Option<PatientRef>,
}

impl BookingRequest {
    /// Builds a request from a draft. Returns `None` if any required field is unset.
    pub fn from_draft(draft: &BookingDraft, patient: Option<PatientRef>) -> Option<Self> {
        Some(Self {
            treatment_id: draft.treatment_id()?.clone(),
            practitioner_id: draft.practitioner_id()?,
            date: draft.scheduled_date()?,
            time: draft.scheduled_time()?,
            duration_minutes: draft.duration_minutes()?,
            notes: draft.notes().to_string(),
            is_urgent: draft.is_urgent(),
            patient,
        })
    }

    /// Appointment details for the request. `appointment_type` is the
    /// treatment's display name.
    pub fn to_new_appointment(&self, appointment_type: impl Into<String>) -> NewAppointment {
        let mut details = NewAppointment::new(self.date, self.time, appointment_type);
        details.treatment_id = Some(self.treatment_id.clone());
        details.practitioner_id = Some(self.practitioner_id);
        details.duration_minutes = Some(self.duration_minutes);
        details.notes = if self.notes.trim().is_empty() {
            None
        } else {
            Some(self.notes.clone())
        };
        details.is_urgent = self.is_urgent;
        if let Some(patient) = &self.patient {
            details.patient_id = Some(patient.patient_id.clone());
            details.patient_name = Some(patient.patient_name.clone());
        }
        details
    }
}
