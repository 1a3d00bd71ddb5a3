//! Booking submission outcomes and failures.

use thiserror::Error;

use crate::domain::appointment::{Appointment, AppointmentError};
use crate::domain::foundation::ErrorCode;

/// Why the booking-submission operation did not create an appointment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The service refused the booking as invalid.
    #[error("Booking rejected: {message}")]
    Rejected { code: ErrorCode, message: String },

    /// The requested slot is already taken.
    #[error("Slot no longer available: {0}")]
    SlotTaken(String),

    /// The service could not be reached or failed internally.
    #[error("Booking service unavailable: {0}")]
    Unavailable(String),
}

impl SubmissionError {
    pub fn rejected(code: ErrorCode, message: impl Into<String>) -> Self {
        SubmissionError::Rejected {
            code,
            message: message.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        SubmissionError::Unavailable(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SubmissionError::Rejected { code, .. } => *code,
            SubmissionError::SlotTaken(_) => ErrorCode::SlotConflict,
            SubmissionError::Unavailable(_) => ErrorCode::UpstreamUnavailable,
        }
    }

    /// Returns true if retrying the same draft later may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SubmissionError::Unavailable(_))
    }
}

impl From<AppointmentError> for SubmissionError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::Conflict(msg) => SubmissionError::SlotTaken(msg),
            AppointmentError::Infrastructure(msg) => SubmissionError::Unavailable(msg),
            other => SubmissionError::rejected(other.code(), other.to_string()),
        }
    }
}

/// Why a submit trigger was ignored without calling the submission operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitIgnored {
    /// The wizard is not on the Confirm step.
    NotAtConfirm,
    /// A submission is already outstanding.
    AlreadySubmitting,
    /// Required fields were cleared after reaching Confirm.
    IncompleteDraft,
    /// A completion arrived with no submission outstanding.
    NothingPending,
}

/// Result of a submit trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The appointment was created; the wizard is on Success.
    Confirmed(Appointment),
    /// The operation failed; the wizard stays on Confirm with the draft intact.
    Failed(SubmissionError),
    /// Nothing happened.
    Ignored(SubmitIgnored),
}

impl SubmitOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, SubmitOutcome::Confirmed(_))
    }
}
