//! ListPractitionersHandler - Query handler for practitioners, optionally
//! narrowed to those able to perform one treatment.

use std::sync::Arc;

use crate::domain::catalog::Practitioner;
use crate::domain::foundation::{DomainError, ErrorCode, TreatmentId};
use crate::ports::ReferenceDirectory;

#[derive(Debug, Clone, Default)]
pub struct ListPractitionersQuery {
    pub treatment: Option<TreatmentId>,
}

pub struct ListPractitionersHandler {
    directory: Arc<dyn ReferenceDirectory>,
}

impl ListPractitionersHandler {
    pub fn new(directory: Arc<dyn ReferenceDirectory>) -> Self {
        Self { directory }
    }

    pub async fn handle(&self, query: ListPractitionersQuery) -> Result<Vec<Practitioner>, DomainError> {
        let Some(treatment) = query.treatment else {
            return self.directory.list_practitioners().await;
        };

        let catalog = self.directory.load_catalog().await?;
        if catalog.treatment(&treatment).is_none() {
            return Err(DomainError::new(
                ErrorCode::TreatmentNotFound,
                format!("Unknown treatment '{}'", treatment),
            ));
        }
        Ok(catalog.practitioners_for(&treatment))
    }
}
