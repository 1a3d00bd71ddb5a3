//! HTTP handlers for catalog endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{bad_request, domain_error_response};
use crate::adapters::http::params::{parse_date, parse_optional};
use crate::application::handlers::catalog::{
    ListAvailableSlotsHandler, ListAvailableSlotsQuery, ListPractitionersHandler,
    ListPractitionersQuery, ListTreatmentOptionsHandler,
};
use crate::domain::foundation::{Timestamp, TreatmentId};

use super::dto::{
    PractitionerListEnvelope, PractitionerParams, PractitionerResponse, SlotListEnvelope,
    SlotParams, TreatmentOptionListEnvelope, TreatmentOptionResponse,
};

#[derive(Clone)]
pub struct CatalogHandlers {
    treatments_handler: Arc<ListTreatmentOptionsHandler>,
    practitioners_handler: Arc<ListPractitionersHandler>,
    slots_handler: Arc<ListAvailableSlotsHandler>,
}

impl CatalogHandlers {
    pub fn new(
        treatments_handler: Arc<ListTreatmentOptionsHandler>,
        practitioners_handler: Arc<ListPractitionersHandler>,
        slots_handler: Arc<ListAvailableSlotsHandler>,
    ) -> Self {
        Self {
            treatments_handler,
            practitioners_handler,
            slots_handler,
        }
    }
}

/// GET /api/catalog/treatments
pub async fn list_treatment_options(State(handlers): State<CatalogHandlers>) -> Response {
    match handlers.treatments_handler.handle().await {
        Ok(treatments) => {
            let response = TreatmentOptionListEnvelope {
                success: true,
                treatments: treatments.iter().map(TreatmentOptionResponse::from).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/catalog/practitioners?treatment=
pub async fn list_practitioners(
    State(handlers): State<CatalogHandlers>,
    Query(params): Query<PractitionerParams>,
) -> Response {
    let treatment = match parse_optional::<TreatmentId>("treatment", params.treatment.as_deref()) {
        Ok(t) => t,
        Err(resp) => return resp,
    };

    match handlers
        .practitioners_handler
        .handle(ListPractitionersQuery { treatment })
        .await
    {
        Ok(practitioners) => {
            let response = PractitionerListEnvelope {
                success: true,
                practitioners: practitioners.iter().map(PractitionerResponse::from).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/catalog/slots?date=YYYY-MM-DD
pub async fn list_available_slots(
    State(handlers): State<CatalogHandlers>,
    Query(params): Query<SlotParams>,
) -> Response {
    let Some(raw) = params.date else {
        return bad_request("Query parameter 'date' is required");
    };
    let date = match parse_date("date", &raw) {
        Ok(d) => d,
        Err(resp) => return resp,
    };

    let query = ListAvailableSlotsQuery {
        date,
        today: Timestamp::now().date(),
    };

    match handlers.slots_handler.handle(query).await {
        Ok(slots) => (StatusCode::OK, Json(SlotListEnvelope::from(slots))).into_response(),
        Err(e) => domain_error_response(e),
    }
}
