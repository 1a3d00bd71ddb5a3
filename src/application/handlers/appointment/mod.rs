//! Appointment command and query handlers.

mod create_appointment;
mod get_appointment;
mod list_appointments;
mod update_appointment_status;

pub use create_appointment::{
    CreateAppointmentCommand, CreateAppointmentHandler, CreateAppointmentResult,
};
pub use get_appointment::{GetAppointmentHandler, GetAppointmentQuery};
pub use list_appointments::{ListAppointmentsHandler, ListAppointmentsQuery};
pub use update_appointment_status::{
    UpdateAppointmentStatusCommand, UpdateAppointmentStatusHandler, UpdateAppointmentStatusResult,
};
