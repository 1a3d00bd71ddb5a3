//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod appointment;
pub mod catalog;
pub mod treatment_program;

pub use appointment::{
    CreateAppointmentCommand, CreateAppointmentHandler, CreateAppointmentResult,
    GetAppointmentHandler, GetAppointmentQuery, ListAppointmentsHandler, ListAppointmentsQuery,
    UpdateAppointmentStatusCommand, UpdateAppointmentStatusHandler, UpdateAppointmentStatusResult,
};
pub use catalog::{
    AvailableSlots, ListAvailableSlotsHandler, ListAvailableSlotsQuery, ListPractitionersHandler,
    ListPractitionersQuery, ListTreatmentOptionsHandler,
};
pub use treatment_program::{
    GetTreatmentProgramHandler, GetTreatmentProgramQuery, ListTreatmentProgramsHandler,
    ListTreatmentProgramsQuery,
};
