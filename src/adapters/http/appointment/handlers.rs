//! HTTP handlers for appointment endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::error_response;
use crate::adapters::http::params::{parse_body, parse_date, parse_optional, parse_value};
use crate::application::handlers::appointment::{
    CreateAppointmentCommand, CreateAppointmentHandler, GetAppointmentHandler,
    GetAppointmentQuery, ListAppointmentsHandler, ListAppointmentsQuery,
    UpdateAppointmentStatusCommand, UpdateAppointmentStatusHandler,
};
use crate::domain::appointment::{AppointmentError, AppointmentStatus};
use crate::domain::foundation::{
    AppointmentId, CommandMetadata, PatientId, PractitionerId, TimeOfDay, TreatmentId,
};

use super::dto::{
    AppointmentEnvelope, AppointmentListEnvelope, CreateAppointmentRequest,
    ListAppointmentsParams, UpdateStatusRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AppointmentHandlers {
    create_handler: Arc<CreateAppointmentHandler>,
    get_handler: Arc<GetAppointmentHandler>,
    list_handler: Arc<ListAppointmentsHandler>,
    status_handler: Arc<UpdateAppointmentStatusHandler>,
}

impl AppointmentHandlers {
    pub fn new(
        create_handler: Arc<CreateAppointmentHandler>,
        get_handler: Arc<GetAppointmentHandler>,
        list_handler: Arc<ListAppointmentsHandler>,
        status_handler: Arc<UpdateAppointmentStatusHandler>,
    ) -> Self {
        Self {
            create_handler,
            get_handler,
            list_handler,
            status_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/appointments - List appointments
pub async fn list_appointments(
    State(handlers): State<AppointmentHandlers>,
    Query(params): Query<ListAppointmentsParams>,
) -> Response {
    let date = match params.date.as_deref() {
        Some(raw) => match parse_date("date", raw) {
            Ok(d) => Some(d),
            Err(resp) => return resp,
        },
        None => None,
    };
    let status = match parse_optional::<AppointmentStatus>("status", params.status.as_deref()) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    let query = ListAppointmentsQuery {
        date,
        practitioner_id: params.practitioner_id.map(PractitionerId::new),
        status,
    };

    match handlers.list_handler.handle(query).await {
        Ok(appointments) => {
            (StatusCode::OK, Json(AppointmentListEnvelope::ok(&appointments))).into_response()
        }
        Err(e) => handle_appointment_error(e),
    }
}

/// GET /api/appointments/:id - Get appointment details
pub async fn get_appointment(
    State(handlers): State<AppointmentHandlers>,
    Path(appointment_id): Path<String>,
) -> Response {
    let appointment_id = match parse_value::<AppointmentId>("appointment ID", &appointment_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match handlers
        .get_handler
        .handle(GetAppointmentQuery { appointment_id })
        .await
    {
        Ok(appointment) => {
            (StatusCode::OK, Json(AppointmentEnvelope::ok(&appointment))).into_response()
        }
        Err(e) => handle_appointment_error(e),
    }
}

/// POST /api/appointments - Book an appointment
pub async fn create_appointment(
    State(handlers): State<AppointmentHandlers>,
    headers: HeaderMap,
    payload: Result<Json<CreateAppointmentRequest>, JsonRejection>,
) -> Response {
    let req = match parse_body(payload) {
        Ok(req) => req,
        Err(resp) => return resp,
    };
    let cmd = match to_command(req) {
        Ok(cmd) => cmd,
        Err(resp) => return resp,
    };

    let metadata = request_metadata(&headers);

    match handlers.create_handler.handle(cmd, metadata).await {
        Ok(result) => (
            StatusCode::CREATED,
            Json(AppointmentEnvelope::ok(&result.appointment)),
        )
            .into_response(),
        Err(e) => handle_appointment_error(e),
    }
}

/// PATCH /api/appointments/:id/status - Change appointment status
pub async fn update_appointment_status(
    State(handlers): State<AppointmentHandlers>,
    Path(appointment_id): Path<String>,
    headers: HeaderMap,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Response {
    let req = match parse_body(payload) {
        Ok(req) => req,
        Err(resp) => return resp,
    };
    let appointment_id = match parse_value::<AppointmentId>("appointment ID", &appointment_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let status = match parse_value::<AppointmentStatus>("status", &req.status) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    let cmd = UpdateAppointmentStatusCommand {
        appointment_id,
        status,
    };
    let metadata = request_metadata(&headers);

    match handlers.status_handler.handle(cmd, metadata).await {
        Ok(result) => {
            (StatusCode::OK, Json(AppointmentEnvelope::ok(&result.appointment))).into_response()
        }
        Err(e) => handle_appointment_error(e),
    }
}

/// Tags the command with the request id set by the request-id middleware.
fn request_metadata(headers: &HeaderMap) -> CommandMetadata {
    let metadata = CommandMetadata::new().with_source("http");
    match headers.get("x-request-id").and_then(|v| v.to_str().ok()) {
        Some(id) => metadata.with_correlation_id(id),
        None => metadata,
    }
}

fn to_command(req: CreateAppointmentRequest) -> Result<CreateAppointmentCommand, Response> {
    let date = match req.date.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
        Some(raw) => Some(parse_date("date", raw)?),
        None => None,
    };

    Ok(CreateAppointmentCommand {
        patient_id: parse_optional::<PatientId>("patientId", req.patient_id.as_deref())?,
        patient_name: req.patient_name.filter(|n| !n.trim().is_empty()),
        date,
        time: parse_optional::<TimeOfDay>("time", req.time.as_deref())?,
        appointment_type: req.appointment_type,
        treatment_id: parse_optional::<TreatmentId>("treatmentId", req.treatment_id.as_deref())?,
        practitioner_id: req.practitioner_id.map(PractitionerId::new),
        duration_minutes: req.duration,
        notes: req.notes,
        is_urgent: req.is_urgent.unwrap_or(false),
    })
}

fn handle_appointment_error(error: AppointmentError) -> Response {
    let message = match &error {
        AppointmentError::ValidationFailed { field, message } => {
            format!("Validation failed for {}: {}", field, message)
        }
        AppointmentError::Conflict(msg) | AppointmentError::InvalidState(msg) => msg.clone(),
        other => other.to_string(),
    };
    error_response(error.code(), message)
}
