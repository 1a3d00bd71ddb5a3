//! Practitioners and the treatments they are qualified to perform.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::{PractitionerId, TreatmentId, ValidationError};

/// A clinic practitioner as shown in the booking directory.
///
/// # Invariants
///
/// - `name` is non-empty
/// - `rating` is within 0.0..=5.0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Practitioner {
    id: PractitionerId,
    name: String,
    specialization: String,
    years_of_experience: u8,
    rating: f32,
    capabilities: BTreeSet<TreatmentId>,
}

impl Practitioner {
    /// Creates a practitioner record.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    /// - `OutOfRange` if the rating is outside 0-5
    pub fn new(
        id: PractitionerId,
        name: impl Into<String>,
        specialization: impl Into<String>,
        years_of_experience: u8,
        rating: f32,
        capabilities: impl IntoIterator<Item = TreatmentId>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if !(0.0..=5.0).contains(&rating) {
            return Err(ValidationError::out_of_range("rating", 0, 5, rating.round() as i32));
        }
        Ok(Self {
            id,
            name,
            specialization: specialization.into(),
            years_of_experience,
            rating,
            capabilities: capabilities.into_iter().collect(),
        })
    }

    pub fn id(&self) -> PractitionerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn specialization(&self) -> &str {
        &self.specialization
    }

    pub fn years_of_experience(&self) -> u8 {
        self.years_of_experience
    }

    pub fn rating(&self) -> f32 {
        self.rating
    }

    /// Treatments this practitioner can perform.
    pub fn capabilities(&self) -> &BTreeSet<TreatmentId> {
        &self.capabilities
    }

    /// Returns true if the practitioner is qualified for the treatment.
    pub fn can_perform(&self, treatment: &TreatmentId) -> bool {
        self.capabilities.contains(treatment)
    }
}
