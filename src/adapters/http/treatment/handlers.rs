//! HTTP handlers for treatment program endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::error_response;
use crate::adapters::http::params::{parse_optional, parse_value};
use crate::application::handlers::treatment_program::{
    GetTreatmentProgramHandler, GetTreatmentProgramQuery, ListTreatmentProgramsHandler,
    ListTreatmentProgramsQuery,
};
use crate::domain::foundation::{PatientId, TreatmentProgramId};
use crate::domain::treatment_program::TreatmentProgramError;

use super::dto::{
    ListTreatmentProgramsParams, TreatmentProgramEnvelope, TreatmentProgramListEnvelope,
    TreatmentProgramResponse,
};

#[derive(Clone)]
pub struct TreatmentProgramHandlers {
    list_handler: Arc<ListTreatmentProgramsHandler>,
    get_handler: Arc<GetTreatmentProgramHandler>,
}

impl TreatmentProgramHandlers {
    pub fn new(
        list_handler: Arc<ListTreatmentProgramsHandler>,
        get_handler: Arc<GetTreatmentProgramHandler>,
    ) -> Self {
        Self {
            list_handler,
            get_handler,
        }
    }
}

/// GET /api/treatments - List treatment programs
pub async fn list_treatment_programs(
    State(handlers): State<TreatmentProgramHandlers>,
    Query(params): Query<ListTreatmentProgramsParams>,
) -> Response {
    let patient_id = match parse_optional::<PatientId>("patientId", params.patient_id.as_deref()) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    match handlers
        .list_handler
        .handle(ListTreatmentProgramsQuery { patient_id })
        .await
    {
        Ok(programs) => {
            let response = TreatmentProgramListEnvelope {
                success: true,
                treatments: programs.iter().map(TreatmentProgramResponse::from).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_program_error(e),
    }
}

/// GET /api/treatments/:id - Get one treatment program
pub async fn get_treatment_program(
    State(handlers): State<TreatmentProgramHandlers>,
    Path(program_id): Path<String>,
) -> Response {
    let program_id = match parse_value::<TreatmentProgramId>("treatment ID", &program_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match handlers
        .get_handler
        .handle(GetTreatmentProgramQuery { program_id })
        .await
    {
        Ok(program) => {
            let response = TreatmentProgramEnvelope {
                success: true,
                treatment: (&program).into(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_program_error(e),
    }
}

fn handle_program_error(error: TreatmentProgramError) -> Response {
    error_response(error.code(), error.to_string())
}
