//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use super::ValidationError;

/// Unique identifier for a booked appointment.
///
/// Numeric, assigned by the appointment store on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppointmentId(u64);

impl AppointmentId {
    /// Creates an AppointmentId from a raw number.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw number.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AppointmentId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Unique identifier for a patient's treatment program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TreatmentProgramId(u64);

impl TreatmentProgramId {
    /// Creates a TreatmentProgramId from a raw number.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw number.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TreatmentProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TreatmentProgramId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Identifier of a practitioner in the clinic directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PractitionerId(u32);

impl PractitionerId {
    /// Creates a PractitionerId from a raw number.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw number.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PractitionerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PractitionerId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Slug identifying a treatment offered by the clinic (e.g. `shirodhara`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TreatmentId(String);

impl TreatmentId {
    /// Creates a TreatmentId, returning error if empty or not a lowercase slug.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::empty_field("treatment_id"));
        }
        if !id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
        {
            return Err(ValidationError::invalid_format(
                "treatment_id",
                "expected a lowercase slug",
            ));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TreatmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TreatmentId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TreatmentId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TreatmentId> for String {
    fn from(id: TreatmentId) -> Self {
        id.0
    }
}

/// Clinic-issued patient identifier (e.g. `P001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(String);

impl PatientId {
    /// Creates a new PatientId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("patient_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PatientId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appointment_id_parses_from_path_segment() {
        let id: AppointmentId = "42".parse().unwrap();
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn appointment_id_rejects_non_numeric() {
        assert!("abc".parse::<AppointmentId>().is_err());
    }

    #[test]
    fn practitioner_id_serializes_as_number() {
        let json = serde_json::to_string(&PractitionerId::new(3)).unwrap();
        assert_eq!(json, "3");
    }

    #[test]
    fn treatment_id_accepts_slug() {
        let id = TreatmentId::new("shirodhara").unwrap();
        assert_eq!(id.as_str(), "shirodhara");
    }

    #[test]
    fn treatment_id_rejects_empty_and_uppercase() {
        assert!(matches!(
            TreatmentId::new(""),
            Err(ValidationError::EmptyField { .. })
        ));
        assert!(matches!(
            TreatmentId::new("Shirodhara"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn treatment_id_deserializes_through_validation() {
        let ok: TreatmentId = serde_json::from_str("\"nasya\"").unwrap();
        assert_eq!(ok.as_str(), "nasya");
        assert!(serde_json::from_str::<TreatmentId>("\"Not A Slug\"").is_err());
    }

    #[test]
    fn patient_id_rejects_blank() {
        assert!(PatientId::new("   ").is_err());
        assert_eq!(PatientId::new("P001").unwrap().as_str(), "P001");
    }
}
