//! Treatment program HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::TreatmentProgramHandlers;
pub use routes::treatment_program_routes;
