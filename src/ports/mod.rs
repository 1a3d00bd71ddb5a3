//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Booking Ports
//!
//! - `ReferenceDirectory` - Read-only treatments, practitioners and slot template
//! - `BookingSubmitter` - Submits a completed booking draft
//!
//! ## Record Ports
//!
//! - `AppointmentRepository` - Appointment persistence
//! - `TreatmentProgramReader` - Treatment program queries

mod appointment_repository;
mod booking_submitter;
mod reference_directory;
mod treatment_program_reader;

pub use appointment_repository::AppointmentRepository;
pub use booking_submitter::BookingSubmitter;
pub use reference_directory::ReferenceDirectory;
pub use treatment_program_reader::TreatmentProgramReader;
