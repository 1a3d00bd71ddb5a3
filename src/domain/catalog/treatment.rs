//! Treatment options offered by the clinic.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{TreatmentId, ValidationError};

/// Longest single session the clinic schedules.
pub const MAX_TREATMENT_MINUTES: u32 = 480;

/// A bookable treatment with a fixed session length.
///
/// # Invariants
///
/// - `name` is non-empty
/// - `duration_minutes` is between 1 and [`MAX_TREATMENT_MINUTES`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatmentOption {
    id: TreatmentId,
    name: String,
    description: String,
    duration_minutes: u32,
}

impl TreatmentOption {
    /// Creates a treatment option.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    /// - `OutOfRange` if the duration is zero or longer than a working day
    pub fn new(
        id: TreatmentId,
        name: impl Into<String>,
        description: impl Into<String>,
        duration_minutes: u32,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if duration_minutes == 0 || duration_minutes > MAX_TREATMENT_MINUTES {
            return Err(ValidationError::out_of_range(
                "duration_minutes",
                1,
                MAX_TREATMENT_MINUTES as i32,
                duration_minutes as i32,
            ));
        }
        Ok(Self {
            id,
            name,
            description: description.into(),
            duration_minutes,
        })
    }

    pub fn id(&self) -> &TreatmentId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Session length in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }
}
