//! HTTP routes for treatment program endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_treatment_program, list_treatment_programs, TreatmentProgramHandlers};

pub fn treatment_program_routes(handlers: TreatmentProgramHandlers) -> Router {
    Router::new()
        .route("/", get(list_treatment_programs))
        .route("/:id", get(get_treatment_program))
        .with_state(handlers)
}
