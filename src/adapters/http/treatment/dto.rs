//! Response DTOs for treatment program endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::treatment_program::TreatmentProgram;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentProgramResponse {
    pub id: u64,
    pub patient_id: String,
    #[serde(rename = "type")]
    pub program_type: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    pub sessions: u32,
    pub completed_sessions: u32,
    /// Whole-number percentage of sessions completed.
    pub progress: u8,
}

impl From<&TreatmentProgram> for TreatmentProgramResponse {
    fn from(p: &TreatmentProgram) -> Self {
        Self {
            id: p.id().value(),
            patient_id: p.patient_id().to_string(),
            program_type: p.program_type().to_string(),
            start_date: p.start_date().format("%Y-%m-%d").to_string(),
            end_date: p.end_date().format("%Y-%m-%d").to_string(),
            status: p.status().to_string(),
            sessions: p.sessions(),
            completed_sessions: p.completed_sessions(),
            progress: p.progress().value(),
        }
    }
}

/// `{ "success": true, "treatment": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreatmentProgramEnvelope {
    pub success: bool,
    pub treatment: TreatmentProgramResponse,
}

/// `{ "success": true, "treatments": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreatmentProgramListEnvelope {
    pub success: bool,
    pub treatments: Vec<TreatmentProgramResponse>,
}

/// Query parameters for `GET /api/treatments`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTreatmentProgramsParams {
    pub patient_id: Option<String>,
}
