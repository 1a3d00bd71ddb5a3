//! BookingCatalog - the reference data a booking flow reads from.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PractitionerId, TimeOfDay, TreatmentId};

use super::{Practitioner, TreatmentOption};

/// Immutable snapshot of treatments, practitioners and the daily slot template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingCatalog {
    treatments: Vec<TreatmentOption>,
    practitioners: Vec<Practitioner>,
    slot_template: Vec<TimeOfDay>,
}

impl BookingCatalog {
    /// Builds a catalog. Slot times are sorted and de-duplicated.
    pub fn new(
        treatments: Vec<TreatmentOption>,
        practitioners: Vec<Practitioner>,
        mut slot_template: Vec<TimeOfDay>,
    ) -> Self {
        slot_template.sort();
        slot_template.dedup();
        Self {
            treatments,
            practitioners,
            slot_template,
        }
    }

    pub fn treatments(&self) -> &[TreatmentOption] {
        &self.treatments
    }

    pub fn practitioners(&self) -> &[Practitioner] {
        &self.practitioners
    }

    /// Candidate start times offered on any bookable day.
    pub fn slot_template(&self) -> &[TimeOfDay] {
        &self.slot_template
    }

    /// Looks up a treatment by id.
    pub fn treatment(&self, id: &TreatmentId) -> Option<&TreatmentOption> {
        self.treatments.iter().find(|t| t.id() == id)
    }

    /// Looks up a practitioner by id.
    pub fn practitioner(&self, id: PractitionerId) -> Option<&Practitioner> {
        self.practitioners.iter().find(|p| p.id() == id)
    }

    /// Practitioners whose capability set contains `treatment`, in directory order.
    pub fn practitioners_for(&self, treatment: &TreatmentId) -> Vec<Practitioner> {
        self.practitioners
            .iter()
            .filter(|p| p.can_perform(treatment))
            .cloned()
            .collect()
    }
}
