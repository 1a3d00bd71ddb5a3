//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, the state machine trait, and error
//! types that form the vocabulary of the booking domain.

mod command;
mod errors;
mod ids;
mod percentage;
mod state_machine;
mod time_of_day;
mod timestamp;

pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AppointmentId, PatientId, PractitionerId, TreatmentId, TreatmentProgramId};
pub use percentage::Percentage;
pub use state_machine::StateMachine;
pub use time_of_day::TimeOfDay;
pub use timestamp::Timestamp;
