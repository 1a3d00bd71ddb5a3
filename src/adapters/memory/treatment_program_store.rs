//! In-memory treatment program store.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, PatientId, TreatmentProgramId};
use crate::domain::treatment_program::TreatmentProgram;
use crate::ports::TreatmentProgramReader;

pub struct InMemoryTreatmentProgramStore {
    programs: RwLock<BTreeMap<TreatmentProgramId, TreatmentProgram>>,
}

impl InMemoryTreatmentProgramStore {
    pub fn new() -> Self {
        Self {
            programs: RwLock::new(BTreeMap::new()),
        }
    }

    /// Creates a store holding one running and one finished program.
    pub fn with_sample_data() -> Result<Self, DomainError> {
        let store = Self::new();
        store.insert(TreatmentProgram::new(
            TreatmentProgramId::new(1),
            PatientId::new("P001")?,
            "Panchakarma",
            sample_date(1, 15)?,
            sample_date(2, 15)?,
            12,
            8,
        )?)?;
        store.insert(TreatmentProgram::new(
            TreatmentProgramId::new(2),
            PatientId::new("P002")?,
            "Abhyanga",
            sample_date(1, 10)?,
            sample_date(1, 25)?,
            10,
            10,
        )?)?;
        Ok(store)
    }

    /// Adds or replaces a program.
    pub fn insert(&self, program: TreatmentProgram) -> Result<(), DomainError> {
        self.programs
            .write()
            .map_err(|_| lock_poisoned())?
            .insert(program.id(), program);
        Ok(())
    }
}

impl Default for InMemoryTreatmentProgramStore {
    fn default() -> Self {
        Self::new()
    }
}

fn sample_date(month: u32, day: u32) -> Result<NaiveDate, DomainError> {
    NaiveDate::from_ymd_opt(2024, month, day)
        .ok_or_else(|| DomainError::new(ErrorCode::InternalError, "invalid sample date"))
}

fn lock_poisoned() -> DomainError {
    DomainError::new(ErrorCode::StorageError, "treatment program store lock poisoned")
}

#[async_trait]
impl TreatmentProgramReader for InMemoryTreatmentProgramStore {
    async fn list(&self) -> Result<Vec<TreatmentProgram>, DomainError> {
        Ok(self
            .programs
            .read()
            .map_err(|_| lock_poisoned())?
            .values()
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: TreatmentProgramId) -> Result<Option<TreatmentProgram>, DomainError> {
        Ok(self
            .programs
            .read()
            .map_err(|_| lock_poisoned())?
            .get(&id)
            .cloned())
    }
}
