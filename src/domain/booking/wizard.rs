//! BookingWizard - the step-by-step booking controller.
//!
//! The wizard owns one [`BookingDraft`] and the reference lists it is checked
//! against. Every event (field edit, navigation, submit) completes its state
//! change before returning. Submission is the only suspension point and is
//! split into [`BookingWizard::begin_submission`] and
//! [`BookingWizard::complete_submission`] so a host event loop can keep
//! handling events while the call is outstanding; [`BookingWizard::submit`]
//! runs both against an injected [`BookingSubmitter`].

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::domain::appointment::Appointment;
use crate::domain::catalog::{BookingCatalog, Practitioner, TreatmentOption};
use crate::domain::foundation::{DomainError, StateMachine, TimeOfDay, TreatmentId};
use crate::ports::{BookingSubmitter, ReferenceDirectory};

use super::rules::{self, is_step_valid};
use super::{
    BookingDraft, BookingRequest, DraftField, PatientRef, SelectionContext, SubmissionError,
    SubmitIgnored, SubmitOutcome, WizardStep,
};

/// Multi-step booking controller.
///
/// # Invariants
///
/// - `step` only moves one position at a time, except Confirm → Success after
///   a successful submission and Success → TreatmentSelect on reset
/// - while `submitting`, the draft and step do not change
/// - `selected_practitioner` mirrors `draft.practitioner_id()`
#[derive(Debug, Clone)]
pub struct BookingWizard {
    step: WizardStep,
    draft: BookingDraft,
    catalog: BookingCatalog,
    practitioners: Vec<Practitioner>,
    available_slots: Vec<TimeOfDay>,
    selected_practitioner: Option<Practitioner>,
    patient: Option<PatientRef>,
    min_date: NaiveDate,
    submitting: bool,
    confirmed: Option<Appointment>,
}

impl BookingWizard {
    /// Starts an empty wizard. The earliest selectable date is the day after `today`.
    pub fn new(catalog: BookingCatalog, today: NaiveDate) -> Self {
        Self::with_lead_days(catalog, today, 1)
    }

    /// Starts an empty wizard requiring bookings `lead_days` ahead (at least one).
    pub fn with_lead_days(catalog: BookingCatalog, today: NaiveDate, lead_days: u32) -> Self {
        let practitioners = catalog.practitioners().to_vec();
        Self {
            step: WizardStep::TreatmentSelect,
            draft: BookingDraft::new(),
            catalog,
            practitioners,
            available_slots: Vec::new(),
            selected_practitioner: None,
            patient: None,
            min_date: rules::min_booking_date(today, lead_days),
            submitting: false,
            confirmed: None,
        }
    }

    /// Starts a wizard from the directory's current catalog.
    pub async fn load(
        directory: &dyn ReferenceDirectory,
        today: NaiveDate,
        lead_days: u32,
    ) -> Result<Self, DomainError> {
        let catalog = directory.load_catalog().await?;
        Ok(Self::with_lead_days(catalog, today, lead_days))
    }

    /// Attaches the patient the booking is made for.
    pub fn for_patient(mut self, patient: PatientRef) -> Self {
        self.patient = Some(patient);
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn catalog(&self) -> &BookingCatalog {
        &self.catalog
    }

    /// Practitioners currently offered on the practitioner step.
    pub fn practitioners(&self) -> &[Practitioner] {
        &self.practitioners
    }

    /// Start times currently offered on the date/time step.
    pub fn available_slots(&self) -> &[TimeOfDay] {
        &self.available_slots
    }

    /// Full record of the chosen practitioner, for display.
    pub fn selected_practitioner(&self) -> Option<&Practitioner> {
        self.selected_practitioner.as_ref()
    }

    /// Full record of the chosen treatment, for display.
    pub fn selected_treatment(&self) -> Option<&TreatmentOption> {
        self.draft
            .treatment_id()
            .and_then(|id| self.catalog.treatment(id))
    }

    /// Earliest date the date picker accepts.
    pub fn min_date(&self) -> NaiveDate {
        self.min_date
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// The server-confirmed appointment, once on Success.
    pub fn confirmed(&self) -> Option<&Appointment> {
        self.confirmed.as_ref()
    }

    /// Whether the current step's requirements are met.
    pub fn is_current_step_valid(&self) -> bool {
        is_step_valid(self.step, &self.draft)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Field edits
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies one field edit. Returns false (and changes nothing) if the
    /// referenced treatment, practitioner, date or slot is not selectable, or
    /// if the wizard is submitting or finished.
    pub fn select_field(&mut self, field: DraftField) -> bool {
        if self.submitting || self.step == WizardStep::Success {
            debug!(step = %self.step, "Ignoring field edit while locked");
            return false;
        }

        let ctx = SelectionContext {
            catalog: &self.catalog,
            practitioners: &self.practitioners,
            slots: &self.available_slots,
            min_date: self.min_date,
        };
        let refresh = match &field {
            DraftField::Treatment(id) => Refresh::Practitioners(id.clone()),
            DraftField::Date(date) => Refresh::Slots(*date),
            _ => Refresh::None,
        };

        let Some(next) = self.draft.apply(field, &ctx) else {
            debug!(step = %self.step, "Rejected field edit referencing unknown value");
            return false;
        };
        self.draft = next;

        match refresh {
            Refresh::Practitioners(treatment) => self.refresh_practitioners(&treatment),
            Refresh::Slots(date) => self.refresh_available_slots(Some(date)),
            Refresh::None => {}
        }
        self.selected_practitioner = self
            .draft
            .practitioner_id()
            .and_then(|id| self.catalog.practitioner(id).cloned());
        true
    }

    /// Recomputes the practitioner list as those able to perform `treatment`.
    pub fn refresh_practitioners(&mut self, treatment: &TreatmentId) {
        self.practitioners = self.catalog.practitioners_for(treatment);
    }

    /// Recomputes candidate slots for `date`. A chosen time that is no longer
    /// offered is cleared.
    pub fn refresh_available_slots(&mut self, date: Option<NaiveDate>) {
        self.available_slots = rules::available_slots(date, self.catalog.slot_template());
        if let Some(time) = self.draft.scheduled_time() {
            if !self.available_slots.contains(&time) {
                self.draft.clear_time();
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Moves to the next step if the current one is valid. Returns true if the step changed.
    pub fn advance(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        let next = rules::next_step(self.step, &self.draft);
        self.move_to(next)
    }

    /// Moves to the previous step, keeping everything entered. Returns true if the step changed.
    pub fn retreat(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        let previous = rules::previous_step(self.step);
        self.move_to(previous)
    }

    /// Clears the draft and returns to the first step.
    ///
    /// Ignored while a submission is outstanding.
    pub fn reset(&mut self) {
        if self.submitting {
            return;
        }
        self.step = WizardStep::TreatmentSelect;
        self.draft = BookingDraft::new();
        self.practitioners = self.catalog.practitioners().to_vec();
        self.available_slots.clear();
        self.selected_practitioner = None;
        self.confirmed = None;
    }

    fn move_to(&mut self, target: WizardStep) -> bool {
        if target == self.step {
            return false;
        }
        match self.step.transition_to(target) {
            Ok(step) => {
                debug!(from = %self.step, to = %step, "Wizard step changed");
                self.step = step;
                true
            }
            Err(_) => false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Submission
    // ─────────────────────────────────────────────────────────────────────────

    /// Marks the wizard as submitting and returns the payload to send.
    ///
    /// # Errors
    ///
    /// Returns the reason the trigger is ignored: not on Confirm, already
    /// submitting, or required fields missing.
    pub fn begin_submission(&mut self) -> Result<BookingRequest, SubmitIgnored> {
        if self.submitting {
            return Err(SubmitIgnored::AlreadySubmitting);
        }
        if self.step != WizardStep::Confirm || !self.is_current_step_valid() {
            return Err(SubmitIgnored::NotAtConfirm);
        }
        let request = BookingRequest::from_draft(&self.draft, self.patient.clone())
            .ok_or(SubmitIgnored::IncompleteDraft)?;
        self.submitting = true;
        Ok(request)
    }

    /// Records the result of the outstanding submission.
    ///
    /// On success the wizard moves to Success and keeps the confirmed
    /// record. On failure it stays on Confirm with the draft untouched and
    /// hands the failure back.
    pub fn complete_submission(
        &mut self,
        result: Result<Appointment, SubmissionError>,
    ) -> SubmitOutcome {
        if !self.submitting {
            return SubmitOutcome::Ignored(SubmitIgnored::NothingPending);
        }
        self.submitting = false;

        match result {
            Ok(appointment) => {
                info!(appointment_id = %appointment.id(), "Appointment booked");
                self.step = WizardStep::Success;
                self.confirmed = Some(appointment.clone());
                SubmitOutcome::Confirmed(appointment)
            }
            Err(err) => {
                warn!(code = %err.code(), retryable = err.is_retryable(), "Failed to book appointment: {}", err);
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Submits the confirmed draft through `submitter` and waits for the result.
    ///
    /// A trigger while a submission is outstanding, or away from Confirm, is
    /// ignored without calling `submitter`.
    pub async fn submit(&mut self, submitter: &dyn BookingSubmitter) -> SubmitOutcome {
        let request = match self.begin_submission() {
            Ok(request) => request,
            Err(reason) => {
                debug!(?reason, "Submit trigger ignored");
                return SubmitOutcome::Ignored(reason);
            }
        };
        let result = submitter.submit(&request).await;
        self.complete_submission(result)
    }
}

enum Refresh {
    Practitioners(TreatmentId),
    Slots(NaiveDate),
    None,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::appointment::NewAppointment;
    use crate::domain::foundation::{AppointmentId, ErrorCode, PractitionerId};
    use async_trait::async_trait;
    use std::sync::Mutex;

    fn tid(s: &str) -> TreatmentId {
        TreatmentId::new(s).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 19).unwrap()
    }

    fn tomorrow() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
    }

    fn nine() -> TimeOfDay {
        TimeOfDay::from_hm(9, 0).unwrap()
    }

    fn catalog() -> BookingCatalog {
        BookingCatalog::new(
            vec![
                TreatmentOption::new(tid("shirodhara"), "Shirodhara", "", 90).unwrap(),
                TreatmentOption::new(tid("nasya"), "Nasya", "", 30).unwrap(),
            ],
            vec![
                Practitioner::new(PractitionerId::new(1), "Dr. Priya Sharma", "", 15, 4.9, [tid("shirodhara")]).unwrap(),
                Practitioner::new(PractitionerId::new(2), "Dr. Rajesh Kumar", "", 12, 4.8, [tid("nasya")]).unwrap(),
            ],
            vec![nine(), TimeOfDay::from_hm(9, 30).unwrap()],
        )
    }

    fn at_confirm() -> BookingWizard {
        let mut w = BookingWizard::new(catalog(), today());
        assert!(w.select_field(DraftField::Treatment(tid("shirodhara"))));
        assert!(w.advance());
        assert!(w.select_field(DraftField::Practitioner(PractitionerId::new(1))));
        assert!(w.advance());
        assert!(w.select_field(DraftField::Date(tomorrow())));
        assert!(w.select_field(DraftField::Time(nine())));
        assert!(w.advance());
        assert_eq!(w.step(), WizardStep::Confirm);
        w
    }

    struct FakeSubmitter {
        fail_with: Option<SubmissionError>,
        calls: Mutex<Vec<BookingRequest>>,
    }

    impl FakeSubmitter {
        fn succeeding() -> Self {
            Self {
                fail_with: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing(err: SubmissionError) -> Self {
            Self {
                fail_with: Some(err),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl BookingSubmitter for FakeSubmitter {
        async fn submit(&self, request: &BookingRequest) -> Result<Appointment, SubmissionError> {
            self.calls.lock().unwrap().push(request.clone());
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(Appointment::schedule(
                    AppointmentId::new(1),
                    request.to_new_appointment("Shirodhara"),
                )),
            }
        }
    }

    #[test]
    fn starts_empty_on_first_step() {
        let w = BookingWizard::new(catalog(), today());
        assert_eq!(w.step(), WizardStep::TreatmentSelect);
        assert!(w.draft().is_empty());
        assert_eq!(w.practitioners().len(), 2);
        assert!(w.available_slots().is_empty());
        assert_eq!(w.min_date(), tomorrow());
    }

    #[test]
    fn advance_blocked_until_treatment_selected() {
        let mut w = BookingWizard::new(catalog(), today());
        assert!(!w.advance());
        assert_eq!(w.step(), WizardStep::TreatmentSelect);
    }

    #[test]
    fn selecting_treatment_filters_practitioners() {
        let mut w = BookingWizard::new(catalog(), today());
        w.select_field(DraftField::Treatment(tid("nasya")));
        let ids: Vec<_> = w.practitioners().iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![PractitionerId::new(2)]);
        assert_eq!(w.draft().duration_minutes(), Some(30));
    }

    #[test]
    fn unknown_practitioner_is_ignored() {
        let mut w = BookingWizard::new(catalog(), today());
        w.select_field(DraftField::Treatment(tid("nasya")));
        assert!(!w.select_field(DraftField::Practitioner(PractitionerId::new(1))));
        assert!(w.draft().practitioner_id().is_none());
        assert!(w.selected_practitioner().is_none());
    }

    #[test]
    fn selecting_practitioner_caches_record() {
        let mut w = BookingWizard::new(catalog(), today());
        w.select_field(DraftField::Treatment(tid("shirodhara")));
        w.select_field(DraftField::Practitioner(PractitionerId::new(1)));
        assert_eq!(w.selected_practitioner().unwrap().name(), "Dr. Priya Sharma");
    }

    #[test]
    fn changing_treatment_clears_cached_practitioner_when_incapable() {
        let mut w = BookingWizard::new(catalog(), today());
        w.select_field(DraftField::Treatment(tid("shirodhara")));
        w.select_field(DraftField::Practitioner(PractitionerId::new(1)));
        w.select_field(DraftField::Treatment(tid("nasya")));
        assert!(w.selected_practitioner().is_none());
        assert!(w.draft().practitioner_id().is_none());
    }

    #[test]
    fn time_requires_date_first() {
        let mut w = BookingWizard::new(catalog(), today());
        assert!(!w.select_field(DraftField::Time(nine())));
        assert!(w.select_field(DraftField::Date(tomorrow())));
        assert_eq!(w.available_slots().len(), 2);
        assert!(w.select_field(DraftField::Time(nine())));
    }

    #[test]
    fn same_day_booking_rejected() {
        let mut w = BookingWizard::new(catalog(), today());
        assert!(!w.select_field(DraftField::Date(today())));
        assert!(w.draft().scheduled_date().is_none());
    }

    #[test]
    fn retreat_keeps_entered_data() {
        let mut w = at_confirm();
        let before = w.draft().clone();
        assert!(w.retreat());
        assert!(w.retreat());
        assert_eq!(w.step(), WizardStep::PractitionerSelect);
        assert_eq!(w.draft(), &before);
    }

    #[test]
    fn retreat_is_noop_on_first_step() {
        let mut w = BookingWizard::new(catalog(), today());
        assert!(!w.retreat());
        assert_eq!(w.step(), WizardStep::TreatmentSelect);
    }

    #[test]
    fn advance_from_confirm_does_not_reach_success() {
        let mut w = at_confirm();
        assert!(!w.advance());
        assert_eq!(w.step(), WizardStep::Confirm);
    }

    #[tokio::test]
    async fn successful_submit_moves_to_success() {
        let mut w = at_confirm();
        let submitter = FakeSubmitter::succeeding();

        let outcome = w.submit(&submitter).await;

        assert!(outcome.is_confirmed());
        assert_eq!(w.step(), WizardStep::Success);
        assert_eq!(w.confirmed().unwrap().details().duration_minutes, Some(90));
        assert!(!w.is_submitting());
    }

    #[tokio::test]
    async fn failed_submit_stays_on_confirm_with_draft_intact() {
        let mut w = at_confirm();
        let before = w.draft().clone();
        let submitter = FakeSubmitter::failing(SubmissionError::unavailable("timeout"));

        let outcome = w.submit(&submitter).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failed(SubmissionError::unavailable("timeout"))
        );
        assert_eq!(w.step(), WizardStep::Confirm);
        assert_eq!(w.draft(), &before);
        assert!(!w.is_submitting());
        assert_eq!(submitter.call_count(), 1);
    }

    #[tokio::test]
    async fn submit_while_outstanding_is_ignored() {
        let mut w = at_confirm();
        let _pending = w.begin_submission().unwrap();
        let before = w.draft().clone();
        let submitter = FakeSubmitter::succeeding();

        let outcome = w.submit(&submitter).await;

        assert_eq!(outcome, SubmitOutcome::Ignored(SubmitIgnored::AlreadySubmitting));
        assert_eq!(submitter.call_count(), 0);
        assert_eq!(w.step(), WizardStep::Confirm);
        assert_eq!(w.draft(), &before);
    }

    #[test]
    fn edits_and_navigation_locked_while_submitting() {
        let mut w = at_confirm();
        w.begin_submission().unwrap();
        assert!(!w.select_field(DraftField::Notes("late note".to_string())));
        assert!(!w.retreat());
        w.reset();
        assert_eq!(w.step(), WizardStep::Confirm);
        assert!(w.is_submitting());
    }

    #[tokio::test]
    async fn submit_away_from_confirm_is_ignored() {
        let mut w = BookingWizard::new(catalog(), today());
        let submitter = FakeSubmitter::succeeding();
        let outcome = w.submit(&submitter).await;
        assert_eq!(outcome, SubmitOutcome::Ignored(SubmitIgnored::NotAtConfirm));
        assert_eq!(submitter.call_count(), 0);
    }

    #[test]
    fn incomplete_draft_at_confirm_is_not_submitted() {
        let mut w = at_confirm();
        w.select_field(DraftField::Treatment(tid("nasya")));
        assert_eq!(w.begin_submission(), Err(SubmitIgnored::IncompleteDraft));
        assert!(!w.is_submitting());
    }

    #[test]
    fn completion_without_pending_submission_is_ignored() {
        let mut w = at_confirm();
        let outcome = w.complete_submission(Err(SubmissionError::rejected(
            ErrorCode::ValidationFailed,
            "nope",
        )));
        assert_eq!(outcome, SubmitOutcome::Ignored(SubmitIgnored::NothingPending));
    }

    #[tokio::test]
    async fn reset_after_success_starts_over() {
        let mut w = at_confirm();
        w.submit(&FakeSubmitter::succeeding()).await;
        assert!(!w.select_field(DraftField::Notes("after".to_string())));

        w.reset();

        assert_eq!(w.step(), WizardStep::TreatmentSelect);
        assert!(w.draft().is_empty());
        assert!(w.confirmed().is_none());
        assert_eq!(w.practitioners().len(), 2);
    }

    #[test]
    fn patient_is_carried_into_request() {
        let mut w = at_confirm().for_patient(PatientRef {
            patient_id: crate::domain::foundation::PatientId::new("P001").unwrap(),
            patient_name: "Rajesh Kumar".to_string(),
        });
        let request = w.begin_submission().unwrap();
        let details: NewAppointment = request.to_new_appointment("Shirodhara");
        assert_eq!(details.patient_name.as_deref(), Some("Rajesh Kumar"));
    }
}
