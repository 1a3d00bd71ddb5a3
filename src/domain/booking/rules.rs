//! Pure booking rules: step validity, date bounds and slot derivation.

use chrono::{Days, NaiveDate};

use crate::domain::foundation::TimeOfDay;

use super::{BookingDraft, WizardStep};

/// Returns true if the draft satisfies what `step` requires before moving on.
pub fn is_step_valid(step: WizardStep, draft: &BookingDraft) -> bool {
    match step {
        WizardStep::TreatmentSelect => draft.treatment_id().is_some(),
        WizardStep::PractitionerSelect => draft.practitioner_id().is_some(),
        WizardStep::DateTimeSelect => {
            draft.scheduled_date().is_some() && draft.scheduled_time().is_some()
        }
        WizardStep::Confirm => true,
        WizardStep::Success => false,
    }
}

/// Step the "Next" button leads to, or `step` itself when blocked.
pub fn next_step(step: WizardStep, draft: &BookingDraft) -> WizardStep {
    match step.next() {
        Some(next) if is_step_valid(step, draft) => next,
        _ => step,
    }
}

/// Step the "Previous" button leads to, or `step` itself at the edges.
pub fn previous_step(step: WizardStep) -> WizardStep {
    step.previous().unwrap_or(step)
}

/// Earliest bookable day: `lead_days` after `today`, never today itself.
pub fn min_booking_date(today: NaiveDate, lead_days: u32) -> NaiveDate {
    let lead = u64::from(lead_days.max(1));
    today.checked_add_days(Days::new(lead)).unwrap_or(NaiveDate::MAX)
}

/// Candidate slots for a chosen date.
///
/// Every slot of the template is offered once a date is chosen; existing
/// bookings are not consulted here.
pub fn available_slots(date: Option<NaiveDate>, template: &[TimeOfDay]) -> Vec<TimeOfDay> {
    match date {
        Some(_) => template.to_vec(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn empty_draft_only_passes_confirm() {
        let draft = BookingDraft::new();
        assert!(!is_step_valid(WizardStep::TreatmentSelect, &draft));
        assert!(!is_step_valid(WizardStep::PractitionerSelect, &draft));
        assert!(!is_step_valid(WizardStep::DateTimeSelect, &draft));
        assert!(is_step_valid(WizardStep::Confirm, &draft));
    }

    #[test]
    fn next_step_blocks_on_invalid_step() {
        let draft = BookingDraft::new();
        assert_eq!(
            next_step(WizardStep::TreatmentSelect, &draft),
            WizardStep::TreatmentSelect
        );
    }

    #[test]
    fn next_step_never_enters_success() {
        assert_eq!(next_step(WizardStep::Confirm, &BookingDraft::new()), WizardStep::Confirm);
    }

    #[test]
    fn previous_step_stops_at_first() {
        assert_eq!(previous_step(WizardStep::TreatmentSelect), WizardStep::TreatmentSelect);
        assert_eq!(previous_step(WizardStep::Confirm), WizardStep::DateTimeSelect);
    }

    #[test]
    fn min_booking_date_is_tomorrow() {
        assert_eq!(min_booking_date(d(2024, 1, 31), 1), d(2024, 2, 1));
        assert_eq!(min_booking_date(d(2024, 12, 31), 1), d(2025, 1, 1));
    }

    #[test]
    fn min_booking_date_never_allows_same_day() {
        assert_eq!(min_booking_date(d(2024, 5, 10), 0), d(2024, 5, 11));
        assert_eq!(min_booking_date(d(2024, 5, 10), 3), d(2024, 5, 13));
    }

    #[test]
    fn slots_only_offered_once_date_chosen() {
        let template = vec![TimeOfDay::from_hm(9, 0).unwrap()];
        assert!(available_slots(None, &template).is_empty());
        assert_eq!(available_slots(Some(d(2024, 5, 11)), &template), template);
    }
}
