//! HTTP routes for catalog endpoints.

use axum::{routing::get, Router};

use super::handlers::{list_available_slots, list_practitioners, list_treatment_options, CatalogHandlers};

pub fn catalog_routes(handlers: CatalogHandlers) -> Router {
    Router::new()
        .route("/treatments", get(list_treatment_options))
        .route("/practitioners", get(list_practitioners))
        .route("/slots", get(list_available_slots))
        .with_state(handlers)
}
