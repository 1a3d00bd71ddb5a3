//! TreatmentProgram - a multi-session course of treatment for one patient.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Percentage, PatientId, TreatmentProgramId, ValidationError};

/// Whether a program still has sessions ahead of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgramStatus {
    Active,
    Completed,
}

impl fmt::Display for ProgramStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgramStatus::Active => write!(f, "Active"),
            ProgramStatus::Completed => write!(f, "Completed"),
        }
    }
}

/// A patient's course of treatment (e.g. a 12-session Panchakarma).
///
/// # Invariants
///
/// - `completed_sessions <= sessions`
/// - `end_date` is not before `start_date`
/// - status is `Completed` exactly when every session is done
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatmentProgram {
    id: TreatmentProgramId,
    patient_id: PatientId,
    program_type: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    sessions: u32,
    completed_sessions: u32,
}

impl TreatmentProgram {
    /// Creates a program record.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the type is blank
    /// - `OutOfRange` if more sessions are completed than planned
    /// - `InvalidFormat` if the end date precedes the start date
    pub fn new(
        id: TreatmentProgramId,
        patient_id: PatientId,
        program_type: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        sessions: u32,
        completed_sessions: u32,
    ) -> Result<Self, ValidationError> {
        let program_type = program_type.into();
        if program_type.trim().is_empty() {
            return Err(ValidationError::empty_field("type"));
        }
        if completed_sessions > sessions {
            return Err(ValidationError::out_of_range(
                "completed_sessions",
                0,
                sessions as i32,
                completed_sessions as i32,
            ));
        }
        if end_date < start_date {
            return Err(ValidationError::invalid_format(
                "end_date",
                "end date is before start date",
            ));
        }
        Ok(Self {
            id,
            patient_id,
            program_type,
            start_date,
            end_date,
            sessions,
            completed_sessions,
        })
    }

    pub fn id(&self) -> TreatmentProgramId {
        self.id
    }

    pub fn patient_id(&self) -> &PatientId {
        &self.patient_id
    }

    pub fn program_type(&self) -> &str {
        &self.program_type
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn sessions(&self) -> u32 {
        self.sessions
    }

    pub fn completed_sessions(&self) -> u32 {
        self.completed_sessions
    }

    /// Derived from session counts.
    pub fn status(&self) -> ProgramStatus {
        if self.completed_sessions >= self.sessions {
            ProgramStatus::Completed
        } else {
            ProgramStatus::Active
        }
    }

    /// Share of planned sessions already completed.
    pub fn progress(&self) -> Percentage {
        Percentage::from_ratio(self.completed_sessions, self.sessions)
    }

    /// Sessions still to be attended.
    pub fn remaining_sessions(&self) -> u32 {
        self.sessions - self.completed_sessions
    }
}
