//! Catalog query handlers.

mod list_available_slots;
mod list_practitioners;
mod list_treatment_options;

pub use list_available_slots::{AvailableSlots, ListAvailableSlotsHandler, ListAvailableSlotsQuery};
pub use list_practitioners::{ListPractitionersHandler, ListPractitionersQuery};
pub use list_treatment_options::ListTreatmentOptionsHandler;
