//! Appointment HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::AppointmentHandlers;
pub use routes::appointment_routes;
