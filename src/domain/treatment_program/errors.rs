//! Treatment program error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, TreatmentProgramId};

/// Errors raised by treatment program queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreatmentProgramError {
    #[error("Treatment not found: {0}")]
    NotFound(TreatmentProgramId),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl TreatmentProgramError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TreatmentProgramError::NotFound(_) => ErrorCode::TreatmentProgramNotFound,
            TreatmentProgramError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
}

impl From<DomainError> for TreatmentProgramError {
    fn from(err: DomainError) -> Self {
        TreatmentProgramError::Infrastructure(err.to_string())
    }
}
