//! ListTreatmentOptionsHandler - Query handler for bookable treatments.

use std::sync::Arc;

use crate::domain::catalog::TreatmentOption;
use crate::domain::foundation::DomainError;
use crate::ports::ReferenceDirectory;

pub struct ListTreatmentOptionsHandler {
    directory: Arc<dyn ReferenceDirectory>,
}

impl ListTreatmentOptionsHandler {
    pub fn new(directory: Arc<dyn ReferenceDirectory>) -> Self {
        Self { directory }
    }

    pub async fn handle(&self) -> Result<Vec<TreatmentOption>, DomainError> {
        self.directory.list_treatments().await
    }
}
