//! Booking wizard domain module.
//!
//! The four-step booking flow (treatment, practitioner, date/time, confirm)
//! with its success screen, the draft it builds, the rules that gate each
//! step, and the request handed to the booking-submission operation.

mod draft;
mod errors;
mod request;
pub mod rules;
mod step;
mod wizard;

pub use draft::{BookingDraft, DraftField, SelectionContext};
pub use errors::{SubmissionError, SubmitIgnored, SubmitOutcome};
pub use request::{BookingRequest, PatientRef};
pub use step::WizardStep;
pub use wizard::BookingWizard;
