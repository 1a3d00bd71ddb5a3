//! Integration tests for the appointments REST API over a real socket.
//!
//! The API router is served on an ephemeral port and driven with the HTTP
//! booking submitter, the way a wizard hosted in another process books:
//! 1. Created appointments come back as domain records
//! 2. Conflicts, rejections and outages map to the right submission failures
//! 3. The full middleware stack answers with request ids

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use ayursutra_booking::adapters::{
    api_router, with_http_layers, ApiServices, HttpBookingSubmitter, HttpSubmitterConfig,
    InMemoryAppointmentStore, InMemoryTreatmentProgramStore, StaticReferenceDirectory,
};
use ayursutra_booking::config::ServerConfig;
use ayursutra_booking::domain::appointment::AppointmentStatus;
use ayursutra_booking::domain::booking::{
    BookingRequest, BookingWizard, DraftField, PatientRef, SubmissionError, SubmitOutcome,
    WizardStep,
};
use ayursutra_booking::domain::foundation::{
    ErrorCode, PatientId, PractitionerId, TimeOfDay, TreatmentId,
};
use ayursutra_booking::ports::{AppointmentRepository, BookingSubmitter};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestServer {
    addr: SocketAddr,
    store: Arc<InMemoryAppointmentStore>,
    directory: Arc<StaticReferenceDirectory>,
}

impl TestServer {
    async fn start() -> Self {
        let store = Arc::new(InMemoryAppointmentStore::with_sample_data().unwrap());
        let directory = Arc::new(StaticReferenceDirectory::clinic_defaults().unwrap());
        let services = ApiServices {
            appointments: store.clone(),
            programs: Arc::new(InMemoryTreatmentProgramStore::with_sample_data().unwrap()),
            directory: directory.clone(),
            min_lead_days: 1,
        };
        let app = with_http_layers(api_router(&services), &ServerConfig::default());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            store,
            directory,
        }
    }

    fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn submitter(&self) -> HttpBookingSubmitter {
        HttpBookingSubmitter::new(
            HttpSubmitterConfig::new(self.base_url()).with_timeout(Duration::from_secs(5)),
        )
        .unwrap()
    }

    async fn get(&self, path: &str) -> (reqwest::StatusCode, Value) {
        let response = reqwest::get(format!("{}{}", self.base_url(), path))
            .await
            .unwrap();
        let status = response.status();
        (status, response.json().await.unwrap_or(Value::Null))
    }
}

fn booking_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 3, 4).unwrap()
}

fn request(treatment: &str, practitioner: u32, h: u32, m: u32) -> BookingRequest {
    BookingRequest {
        treatment_id: TreatmentId::new(treatment).unwrap(),
        practitioner_id: PractitionerId::new(practitioner),
        date: booking_date(),
        time: TimeOfDay::from_hm(h, m).unwrap(),
        duration_minutes: 60,
        notes: String::new(),
        is_urgent: false,
        patient: Some(PatientRef {
            patient_id: PatientId::new("P003").unwrap(),
            patient_name: "Vikram Singh".to_string(),
        }),
    }
}

// =============================================================================
// Submitter over HTTP
// =============================================================================

#[tokio::test]
async fn submitter_creates_appointment_through_api() {
    let server = TestServer::start().await;
    let submitter = server.submitter();

    let appointment = submitter.submit(&request("abhyanga", 1, 9, 0)).await.unwrap();

    assert_eq!(appointment.status(), AppointmentStatus::Scheduled);
    assert_eq!(appointment.date(), booking_date());
    assert_eq!(appointment.details().appointment_type, "Abhyanga");
    assert_eq!(appointment.details().patient_name.as_deref(), Some("Vikram Singh"));
    // Two sample appointments are seeded before this one.
    assert_eq!(appointment.id().value(), 3);

    let stored = server.store.find_by_id(appointment.id()).await.unwrap();
    assert_eq!(stored.map(|a| a.time()), Some(appointment.time()));
}

#[tokio::test]
async fn overlapping_booking_maps_to_slot_taken() {
    let server = TestServer::start().await;
    let submitter = server.submitter();
    submitter.submit(&request("abhyanga", 1, 9, 0)).await.unwrap();

    let err = submitter
        .submit(&request("swedana", 1, 9, 30))
        .await
        .unwrap_err();

    assert!(matches!(err, SubmissionError::SlotTaken(_)));
    assert_eq!(err.code(), ErrorCode::SlotConflict);
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn unknown_treatment_maps_to_rejection() {
    let server = TestServer::start().await;

    let err = server
        .submitter()
        .submit(&request("udvartana", 1, 9, 0))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SubmissionError::Rejected {
            code: ErrorCode::ValidationFailed,
            ..
        }
    ));
    assert_eq!(server.store.len(), 2);
}

#[tokio::test]
async fn practitioner_who_cannot_perform_treatment_is_rejected() {
    let server = TestServer::start().await;

    let err = server
        .submitter()
        .submit(&request("basti", 1, 9, 0))
        .await
        .unwrap_err();

    assert!(matches!(err, SubmissionError::Rejected { .. }));
}

#[tokio::test]
async fn unreachable_service_maps_to_unavailable() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let submitter = HttpBookingSubmitter::new(
        HttpSubmitterConfig::new(format!("http://{}", addr)).with_timeout(Duration::from_secs(2)),
    )
    .unwrap();

    let err = submitter.submit(&request("abhyanga", 1, 9, 0)).await.unwrap_err();

    assert!(matches!(err, SubmissionError::Unavailable(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn wizard_books_through_remote_service() {
    let server = TestServer::start().await;
    let today = NaiveDate::from_ymd_opt(2030, 3, 1).unwrap();
    let mut wizard = BookingWizard::load(server.directory.as_ref(), today, 1)
        .await
        .unwrap();

    assert!(wizard.select_field(DraftField::Treatment(TreatmentId::new("nasya").unwrap())));
    assert!(wizard.advance());
    assert!(wizard.select_field(DraftField::Practitioner(PractitionerId::new(2))));
    assert!(wizard.advance());
    assert!(wizard.select_field(DraftField::Date(booking_date())));
    assert!(wizard.select_field(DraftField::Time(TimeOfDay::from_hm(15, 30).unwrap())));
    assert!(wizard.select_field(DraftField::Urgent(true)));
    assert!(wizard.advance());

    let outcome = wizard.submit(&server.submitter()).await;

    let SubmitOutcome::Confirmed(appointment) = outcome else {
        panic!("expected a confirmed booking, got {:?}", outcome);
    };
    assert_eq!(wizard.step(), WizardStep::Success);
    assert_eq!(appointment.details().duration_minutes, Some(30));
    assert!(appointment.details().is_urgent);
}

// =============================================================================
// API over the middleware stack
// =============================================================================

#[tokio::test]
async fn list_includes_created_appointment() {
    let server = TestServer::start().await;
    server.submitter().submit(&request("abhyanga", 3, 11, 0)).await.unwrap();

    let (status, body) = server.get("/api/appointments?date=2030-03-04").await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    let appointments = body["appointments"].as_array().unwrap();
    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0]["time"], json!("11:00"));
    assert_eq!(appointments[0]["status"], json!("scheduled"));
}

#[tokio::test]
async fn status_patch_then_illegal_move_is_409() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    let url = format!("{}/api/appointments/1/status", server.base_url());

    let response = client
        .patch(&url)
        .json(&json!({ "status": "cancelled" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let response = client
        .patch(&url)
        .json(&json!({ "status": "completed" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::CONFLICT);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["code"], json!(ErrorCode::InvalidStateTransition.to_string()));
}

#[tokio::test]
async fn responses_carry_request_id() {
    let server = TestServer::start().await;

    let response = reqwest::get(format!("{}/health", server.base_url()))
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn treatment_programs_are_served() {
    let server = TestServer::start().await;

    let (status, body) = server.get("/api/treatments/1").await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["treatment"]["progress"], json!(66));

    let (status, body) = server.get("/api/treatments/99").await;
    assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Treatment not found: 99"));
}
