//! HTTP routes for appointment endpoints.

use axum::{
    routing::{get, patch},
    Router,
};

use super::handlers::{
    create_appointment, get_appointment, list_appointments, update_appointment_status,
    AppointmentHandlers,
};

/// Creates the appointment router with all endpoints.
pub fn appointment_routes(handlers: AppointmentHandlers) -> Router {
    Router::new()
        .route("/", get(list_appointments).post(create_appointment))
        .route("/:id", get(get_appointment))
        .route("/:id/status", patch(update_appointment_status))
        .with_state(handlers)
}
