//! Appointment-specific error types.

use thiserror::Error;

use crate::domain::foundation::{AppointmentId, DomainError, ErrorCode, ValidationError};

/// Appointment-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppointmentError {
    /// Appointment was not found.
    #[error("Appointment not found: {0}")]
    NotFound(AppointmentId),

    /// Input failed validation.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// The practitioner already has an appointment in that window.
    #[error("Slot conflict: {0}")]
    Conflict(String),

    /// Status change not permitted.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Infrastructure error.
    #[error("Error: {0}")]
    Infrastructure(String),
}

impl AppointmentError {
    pub fn not_found(id: AppointmentId) -> Self {
        AppointmentError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppointmentError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        AppointmentError::Conflict(message.into())
    }
    pub fn invalid_state(message: impl Into<String>) -> Self {
        AppointmentError::InvalidState(message.into())
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        AppointmentError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            AppointmentError::NotFound(_) => ErrorCode::AppointmentNotFound,
            AppointmentError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            AppointmentError::Conflict(_) => ErrorCode::SlotConflict,
            AppointmentError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            AppointmentError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
}

impl From<ValidationError> for AppointmentError {
    fn from(err: ValidationError) -> Self {
        AppointmentError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for AppointmentError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => AppointmentError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            ErrorCode::SlotConflict => AppointmentError::Conflict(err.message),
            ErrorCode::InvalidStateTransition => AppointmentError::InvalidState(err.message),
            _ => AppointmentError::Infrastructure(err.to_string()),
        }
    }
}
