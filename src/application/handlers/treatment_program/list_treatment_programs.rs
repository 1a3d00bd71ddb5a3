//! ListTreatmentProgramsHandler - Query handler for treatment programs.

use std::sync::Arc;

use crate::domain::foundation::PatientId;
use crate::domain::treatment_program::{TreatmentProgram, TreatmentProgramError};
use crate::ports::TreatmentProgramReader;

/// Query for treatment programs, optionally for one patient.
#[derive(Debug, Clone, Default)]
pub struct ListTreatmentProgramsQuery {
    pub patient_id: Option<PatientId>,
}

pub struct ListTreatmentProgramsHandler {
    reader: Arc<dyn TreatmentProgramReader>,
}

impl ListTreatmentProgramsHandler {
    pub fn new(reader: Arc<dyn TreatmentProgramReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: ListTreatmentProgramsQuery,
    ) -> Result<Vec<TreatmentProgram>, TreatmentProgramError> {
        let mut programs = self.reader.list().await?;
        if let Some(patient_id) = &query.patient_id {
            programs.retain(|p| p.patient_id() == patient_id);
        }
        programs.sort_by_key(|p| p.id());
        Ok(programs)
    }
}
