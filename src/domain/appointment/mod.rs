//! Appointment domain module.
//!
//! Booked appointments, their lifecycle status, and the rules used to
//! detect overlapping bookings for the same practitioner.

mod aggregate;
mod errors;
mod status;

pub use aggregate::{
    Appointment, NewAppointment, DEFAULT_APPOINTMENT_MINUTES, MAX_APPOINTMENT_MINUTES,
    MAX_NOTES_LENGTH,
};
pub use errors::AppointmentError;
pub use status::AppointmentStatus;
