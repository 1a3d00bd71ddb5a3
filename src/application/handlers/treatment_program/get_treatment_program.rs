//! GetTreatmentProgramHandler - Query handler for a single treatment program.

use std::sync::Arc;

use crate::domain::foundation::TreatmentProgramId;
use crate::domain::treatment_program::{TreatmentProgram, TreatmentProgramError};
use crate::ports::TreatmentProgramReader;

#[derive(Debug, Clone)]
pub struct GetTreatmentProgramQuery {
    pub program_id: TreatmentProgramId,
}

pub struct GetTreatmentProgramHandler {
    reader: Arc<dyn TreatmentProgramReader>,
}

impl GetTreatmentProgramHandler {
    pub fn new(reader: Arc<dyn TreatmentProgramReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: GetTreatmentProgramQuery,
    ) -> Result<TreatmentProgram, TreatmentProgramError> {
        self.reader
            .get_by_id(query.program_id)
            .await?
            .ok_or(TreatmentProgramError::NotFound(query.program_id))
    }
}
