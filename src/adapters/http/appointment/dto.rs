//! Request and response DTOs for appointment endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::appointment::{Appointment, AppointmentStatus, NewAppointment};
use crate::domain::booking::BookingRequest;
use crate::domain::foundation::{
    AppointmentId, PatientId, PractitionerId, Timestamp, TreatmentId, ValidationError,
};

/// Body of `POST /api/appointments`.
///
/// Field names follow the booking form; the wizard's draft names are
/// accepted as aliases. Dates, times and ids arrive as strings and are parsed
/// by the handler; a body that does not match these types is rejected with
/// the failure envelope.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub patient_id: Option<String>,
    pub patient_name: Option<String>,
    #[serde(alias = "scheduledDate")]
    pub date: Option<String>,
    #[serde(alias = "scheduledTime")]
    pub time: Option<String>,
    #[serde(rename = "type")]
    pub appointment_type: Option<String>,
    #[serde(alias = "treatmentType")]
    pub treatment_id: Option<String>,
    pub practitioner_id: Option<u32>,
    pub duration: Option<u32>,
    pub notes: Option<String>,
    pub is_urgent: Option<bool>,
}

impl From<&BookingRequest> for CreateAppointmentRequest {
    fn from(req: &BookingRequest) -> Self {
        Self {
            patient_id: req.patient.as_ref().map(|p| p.patient_id.to_string()),
            patient_name: req.patient.as_ref().map(|p| p.patient_name.clone()),
            date: Some(req.date.format("%Y-%m-%d").to_string()),
            time: Some(req.time.to_string()),
            appointment_type: None,
            treatment_id: Some(req.treatment_id.to_string()),
            practitioner_id: Some(req.practitioner_id.value()),
            duration: Some(req.duration_minutes),
            notes: Some(req.notes.clone()).filter(|n| !n.trim().is_empty()),
            is_urgent: Some(req.is_urgent),
        }
    }
}

/// Body of `PATCH /api/appointments/:id/status`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Query parameters for `GET /api/appointments`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAppointmentsParams {
    pub date: Option<String>,
    pub practitioner_id: Option<u32>,
    pub status: Option<String>,
}

/// Wire form of an appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentResponse {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub appointment_type: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub practitioner_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_urgent: bool,
    pub created_at: String,
}

impl From<&Appointment> for AppointmentResponse {
    fn from(a: &Appointment) -> Self {
        let d = a.details();
        Self {
            id: a.id().value(),
            patient_id: d.patient_id.as_ref().map(|p| p.to_string()),
            patient_name: d.patient_name.clone(),
            date: a.date().format("%Y-%m-%d").to_string(),
            time: a.time().to_string(),
            appointment_type: d.appointment_type.clone(),
            status: a.status().to_string(),
            treatment_id: d.treatment_id.as_ref().map(|t| t.to_string()),
            practitioner_id: d.practitioner_id.map(|p| p.value()),
            duration: d.duration_minutes,
            notes: d.notes.clone(),
            is_urgent: d.is_urgent,
            created_at: a.created_at().as_datetime().to_rfc3339(),
        }
    }
}

impl AppointmentResponse {
    /// Rebuilds the domain record from its wire form.
    pub fn into_appointment(self) -> Result<Appointment, ValidationError> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|_| ValidationError::invalid_format("date", "expected YYYY-MM-DD"))?;
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map(|dt| Timestamp::from_datetime(dt.with_timezone(&Utc)))
            .map_err(|_| ValidationError::invalid_format("createdAt", "expected RFC 3339"))?;

        let mut details = NewAppointment::new(date, self.time.parse()?, self.appointment_type);
        details.patient_id = self.patient_id.map(PatientId::new).transpose()?;
        details.patient_name = self.patient_name;
        details.treatment_id = self.treatment_id.map(TreatmentId::new).transpose()?;
        details.practitioner_id = self.practitioner_id.map(PractitionerId::new);
        details.duration_minutes = self.duration;
        details.notes = self.notes;
        details.is_urgent = self.is_urgent;

        Ok(Appointment::reconstitute(
            AppointmentId::new(self.id),
            self.status.parse::<AppointmentStatus>()?,
            details,
            created_at,
        ))
    }
}

/// `{ "success": true, "appointment": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentEnvelope {
    pub success: bool,
    pub appointment: AppointmentResponse,
}

impl AppointmentEnvelope {
    pub fn ok(appointment: &Appointment) -> Self {
        Self {
            success: true,
            appointment: appointment.into(),
        }
    }
}

/// `{ "success": true, "appointments": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentListEnvelope {
    pub success: bool,
    pub appointments: Vec<AppointmentResponse>,
}

impl AppointmentListEnvelope {
    pub fn ok(appointments: &[Appointment]) -> Self {
        Self {
            success: true,
            appointments: appointments.iter().map(AppointmentResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_accepts_draft_field_names() {
        let req: CreateAppointmentRequest = serde_json::from_str(
            r#"{"treatmentType":"nasya","practitionerId":2,"scheduledDate":"2024-06-01","scheduledTime":"10:30","isUrgent":true}"#,
        )
        .unwrap();
        assert_eq!(req.treatment_id.as_deref(), Some("nasya"));
        assert_eq!(req.date.as_deref(), Some("2024-06-01"));
        assert_eq!(req.time.as_deref(), Some("10:30"));
        assert_eq!(req.is_urgent, Some(true));
    }

    #[test]
    fn response_round_trips_to_domain_record() {
        let mut details = NewAppointment::new(
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            "2:00 PM".parse().unwrap(),
            "Basti",
        );
        details.practitioner_id = Some(PractitionerId::new(2));
        details.duration_minutes = Some(75);
        let original = Appointment::schedule(AppointmentId::new(9), details);

        let wire = AppointmentResponse::from(&original);
        assert_eq!(wire.time, "14:00");
        let rebuilt = wire.into_appointment().unwrap();
        assert_eq!(rebuilt.id(), original.id());
        assert_eq!(rebuilt.details(), original.details());
        assert_eq!(rebuilt.status(), AppointmentStatus::Scheduled);
    }

    #[test]
    fn create_request_accepts_form_field_names() {
        let req: CreateAppointmentRequest = serde_json::from_str(
            r#"{"patientId":"P003","date":"2024-06-01","time":"2:00 PM","type":"Follow-up"}"#,
        )
        .unwrap();
        assert_eq!(req.patient_id.as_deref(), Some("P003"));
        assert_eq!(req.appointment_type.as_deref(), Some("Follow-up"));
    }
}
