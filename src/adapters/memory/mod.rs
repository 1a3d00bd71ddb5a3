//! In-memory adapters.
//!
//! Process-local implementations of the storage and reference-data ports.
//! Data does not survive a restart.

mod appointment_store;
mod static_directory;
mod treatment_program_store;

pub use appointment_store::InMemoryAppointmentStore;
pub use static_directory::{StaticReferenceDirectory, DEFAULT_SLOT_TIMES};
pub use treatment_program_store::InMemoryTreatmentProgramStore;
