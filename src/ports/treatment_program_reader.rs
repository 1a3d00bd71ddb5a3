//! Treatment program reader port (read side).

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, TreatmentProgramId};
use crate::domain::treatment_program::TreatmentProgram;

/// Reader port for treatment program queries.
#[async_trait]
pub trait TreatmentProgramReader: Send + Sync {
    /// All programs, ordered by id.
    async fn list(&self) -> Result<Vec<TreatmentProgram>, DomainError>;

    /// Get a program by ID.
    ///
    /// Returns `None` if not found.
    async fn get_by_id(&self, id: TreatmentProgramId) -> Result<Option<TreatmentProgram>, DomainError>;
}
