//! Treatment program query handlers.

mod get_treatment_program;
mod list_treatment_programs;

pub use get_treatment_program::{GetTreatmentProgramHandler, GetTreatmentProgramQuery};
pub use list_treatment_programs::{ListTreatmentProgramsHandler, ListTreatmentProgramsQuery};
