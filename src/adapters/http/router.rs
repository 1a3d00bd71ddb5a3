//! API router assembly and the HTTP middleware stack.

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Json, Router};
use http::HeaderValue;
use serde_json::{json, Value};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::application::handlers::appointment::{
    CreateAppointmentHandler, GetAppointmentHandler, ListAppointmentsHandler,
    UpdateAppointmentStatusHandler,
};
use crate::application::handlers::catalog::{
    ListAvailableSlotsHandler, ListPractitionersHandler, ListTreatmentOptionsHandler,
};
use crate::application::handlers::treatment_program::{
    GetTreatmentProgramHandler, ListTreatmentProgramsHandler,
};
use crate::config::ServerConfig;
use crate::ports::{AppointmentRepository, ReferenceDirectory, TreatmentProgramReader};

use super::appointment::{appointment_routes, AppointmentHandlers};
use super::catalog::{catalog_routes, CatalogHandlers};
use super::treatment::{treatment_program_routes, TreatmentProgramHandlers};

/// Ports the API is served from.
#[derive(Clone)]
pub struct ApiServices {
    pub appointments: Arc<dyn AppointmentRepository>,
    pub programs: Arc<dyn TreatmentProgramReader>,
    pub directory: Arc<dyn ReferenceDirectory>,
    pub min_lead_days: u32,
}

/// Builds the API router.
///
/// - `/api/appointments` - list, get, create, status change
/// - `/api/treatments` - treatment programs
/// - `/api/catalog` - treatments, practitioners and slots for the booking form
/// - `/health`
pub fn api_router(services: &ApiServices) -> Router {
    let appointments = AppointmentHandlers::new(
        Arc::new(CreateAppointmentHandler::new(
            services.appointments.clone(),
            services.directory.clone(),
        )),
        Arc::new(GetAppointmentHandler::new(services.appointments.clone())),
        Arc::new(ListAppointmentsHandler::new(services.appointments.clone())),
        Arc::new(UpdateAppointmentStatusHandler::new(services.appointments.clone())),
    );

    let programs = TreatmentProgramHandlers::new(
        Arc::new(ListTreatmentProgramsHandler::new(services.programs.clone())),
        Arc::new(GetTreatmentProgramHandler::new(services.programs.clone())),
    );

    let catalog = CatalogHandlers::new(
        Arc::new(ListTreatmentOptionsHandler::new(services.directory.clone())),
        Arc::new(ListPractitionersHandler::new(services.directory.clone())),
        Arc::new(ListAvailableSlotsHandler::new(
            services.directory.clone(),
            services.min_lead_days,
        )),
    );

    Router::new()
        .route("/health", get(health))
        .nest("/api/appointments", appointment_routes(appointments))
        .nest("/api/treatments", treatment_program_routes(programs))
        .nest("/api/catalog", catalog_routes(catalog))
}

/// Wraps `router` with request ids, tracing, timeout and CORS.
///
/// Layers run outermost first: request id → trace → CORS → timeout → handler.
pub fn with_http_layers(router: Router, server: &ServerConfig) -> Router {
    router
        .layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout_secs)))
        .layer(cors_layer(server))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "service": "ayursutra-booking" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::adapters::memory::{
        InMemoryAppointmentStore, InMemoryTreatmentProgramStore, StaticReferenceDirectory,
    };

    fn services() -> ApiServices {
        ApiServices {
            appointments: Arc::new(InMemoryAppointmentStore::with_sample_data().unwrap()),
            programs: Arc::new(InMemoryTreatmentProgramStore::with_sample_data().unwrap()),
            directory: Arc::new(StaticReferenceDirectory::clinic_defaults().unwrap()),
            min_lead_days: 1,
        }
    }

    #[tokio::test]
    async fn health_check_responds() {
        let app = api_router(&services());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn resources_are_mounted_under_api() {
        for uri in ["/api/appointments", "/api/treatments", "/api/catalog/treatments"] {
            let response = api_router(&services())
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        }
    }

    #[tokio::test]
    async fn layered_router_sets_request_id() {
        let app = with_http_layers(api_router(&services()), &ServerConfig::default());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let response = api_router(&services())
            .oneshot(Request::builder().uri("/api/unknown").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
