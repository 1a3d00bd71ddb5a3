//! Booking submitter that posts to the appointments REST endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tracing::debug;

use crate::adapters::http::appointment::dto::{AppointmentEnvelope, CreateAppointmentRequest};
use crate::adapters::http::ErrorResponse;
use crate::domain::appointment::Appointment;
use crate::domain::booking::{BookingRequest, SubmissionError};
use crate::domain::foundation::ErrorCode;
use crate::ports::BookingSubmitter;

/// Configuration for the HTTP submitter.
#[derive(Debug, Clone)]
pub struct HttpSubmitterConfig {
    /// Service root, e.g. `http://localhost:5000`.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpSubmitterConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Posts bookings to `POST /api/appointments`.
pub struct HttpBookingSubmitter {
    config: HttpSubmitterConfig,
    client: Client,
}

impl HttpBookingSubmitter {
    /// Creates a submitter.
    ///
    /// # Errors
    ///
    /// Returns `Unavailable` if the HTTP client cannot be built.
    pub fn new(config: HttpSubmitterConfig) -> Result<Self, SubmissionError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SubmissionError::unavailable(format!("HTTP client: {}", e)))?;
        Ok(Self { config, client })
    }

    fn appointments_url(&self) -> String {
        format!("{}/api/appointments", self.config.base_url.trim_end_matches('/'))
    }

    /// Maps a non-2xx reply to a submission failure.
    async fn failure_from(response: Response) -> SubmissionError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let envelope = serde_json::from_str::<ErrorResponse>(&body).ok();
        let message = envelope
            .as_ref()
            .map(|e| e.message.clone())
            .unwrap_or_else(|| format!("status {}", status));

        match status {
            StatusCode::CONFLICT if is_state_error(envelope.as_ref()) => {
                SubmissionError::rejected(ErrorCode::InvalidStateTransition, message)
            }
            StatusCode::CONFLICT => SubmissionError::SlotTaken(message),
            s if s.is_client_error() => {
                SubmissionError::rejected(rejection_code(envelope.as_ref()), message)
            }
            _ => SubmissionError::unavailable(message),
        }
    }
}

fn is_state_error(envelope: Option<&ErrorResponse>) -> bool {
    envelope.map_or(false, |e| e.code == ErrorCode::InvalidStateTransition.to_string())
}

fn rejection_code(envelope: Option<&ErrorResponse>) -> ErrorCode {
    let by_name = envelope.and_then(|e| {
        [
            ErrorCode::ValidationFailed,
            ErrorCode::EmptyField,
            ErrorCode::OutOfRange,
            ErrorCode::InvalidFormat,
            ErrorCode::TreatmentNotFound,
            ErrorCode::PractitionerNotFound,
        ]
        .into_iter()
        .find(|c| c.to_string() == e.code)
    });
    by_name.unwrap_or(ErrorCode::ValidationFailed)
}

#[async_trait]
impl BookingSubmitter for HttpBookingSubmitter {
    async fn submit(&self, request: &BookingRequest) -> Result<Appointment, SubmissionError> {
        let url = self.appointments_url();
        debug!(%url, treatment = %request.treatment_id, "Posting booking");

        let response = self
            .client
            .post(&url)
            .json(&CreateAppointmentRequest::from(request))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SubmissionError::unavailable("booking request timed out")
                } else {
                    SubmissionError::unavailable(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(Self::failure_from(response).await);
        }

        let envelope: AppointmentEnvelope = response
            .json()
            .await
            .map_err(|e| SubmissionError::unavailable(format!("Malformed booking reply: {}", e)))?;

        envelope
            .appointment
            .into_appointment()
            .map_err(|e| SubmissionError::unavailable(format!("Malformed booking reply: {}", e)))
    }
}
