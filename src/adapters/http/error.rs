//! Shared failure envelope for every API route.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// `{ "success": false, "code": ..., "message": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            code: code.to_string(),
            message: message.into(),
        }
    }
}

/// HTTP status for a domain error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::OutOfRange
        | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,
        ErrorCode::AppointmentNotFound
        | ErrorCode::TreatmentProgramNotFound
        | ErrorCode::TreatmentNotFound
        | ErrorCode::PractitionerNotFound => StatusCode::NOT_FOUND,
        ErrorCode::SlotConflict | ErrorCode::InvalidStateTransition => StatusCode::CONFLICT,
        ErrorCode::UpstreamUnavailable => StatusCode::BAD_GATEWAY,
        ErrorCode::StorageError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Builds the failure response for `code`.
pub fn error_response(code: ErrorCode, message: impl Into<String>) -> Response {
    let status = status_for(code);
    let message = message.into();
    if status.is_server_error() {
        tracing::error!(%code, "Request failed: {}", message);
    }
    (status, Json(ErrorResponse::new(code, message))).into_response()
}

/// Builds a 400 response for a malformed path or query parameter.
pub fn bad_request(message: impl Into<String>) -> Response {
    error_response(ErrorCode::ValidationFailed, message)
}

pub fn domain_error_response(err: DomainError) -> Response {
    error_response(err.code, err.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_codes_to_statuses() {
        assert_eq!(status_for(ErrorCode::OutOfRange), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorCode::AppointmentNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorCode::SlotConflict), StatusCode::CONFLICT);
        assert_eq!(status_for(ErrorCode::StorageError), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn envelope_serializes_with_success_false() {
        let json = serde_json::to_value(ErrorResponse::new(ErrorCode::SlotConflict, "taken")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], "SLOT_CONFLICT");
        assert_eq!(json["message"], "taken");
    }
}
