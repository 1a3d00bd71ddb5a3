//! Response DTOs for catalog endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::catalog::AvailableSlots;
use crate::domain::catalog::{Practitioner, TreatmentOption};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentOptionResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Minutes.
    pub duration: u32,
}

impl From<&TreatmentOption> for TreatmentOptionResponse {
    fn from(t: &TreatmentOption) -> Self {
        Self {
            id: t.id().to_string(),
            name: t.name().to_string(),
            description: t.description().to_string(),
            duration: t.duration_minutes(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PractitionerResponse {
    pub id: u32,
    pub name: String,
    pub specialization: String,
    pub years_of_experience: u8,
    pub rating: f32,
    pub treatments: Vec<String>,
}

impl From<&Practitioner> for PractitionerResponse {
    fn from(p: &Practitioner) -> Self {
        Self {
            id: p.id().value(),
            name: p.name().to_string(),
            specialization: p.specialization().to_string(),
            years_of_experience: p.years_of_experience(),
            rating: p.rating(),
            treatments: p.capabilities().iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreatmentOptionListEnvelope {
    pub success: bool,
    pub treatments: Vec<TreatmentOptionResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PractitionerListEnvelope {
    pub success: bool,
    pub practitioners: Vec<PractitionerResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotListEnvelope {
    pub success: bool,
    pub date: String,
    pub min_date: String,
    pub slots: Vec<String>,
}

impl From<AvailableSlots> for SlotListEnvelope {
    fn from(a: AvailableSlots) -> Self {
        Self {
            success: true,
            date: a.date.format("%Y-%m-%d").to_string(),
            min_date: a.min_date.format("%Y-%m-%d").to_string(),
            slots: a.slots.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PractitionerParams {
    pub treatment: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlotParams {
    pub date: Option<String>,
}
