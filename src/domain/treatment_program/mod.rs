//! Treatment program domain module.
//!
//! Multi-session treatment courses tracked per patient.

mod errors;
mod program;

pub use errors::TreatmentProgramError;
pub use program::{ProgramStatus, TreatmentProgram};
