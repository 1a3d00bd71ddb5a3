//! WizardStep - the screens of the booking flow and their ordering.
//!
//! # Step Order
//!
//! 1. TreatmentSelect → 2. PractitionerSelect → 3. DateTimeSelect →
//! 4. Confirm → 5. Success
//!
//! Navigation moves one step at a time between 1 and 4. Success is entered
//! only from Confirm after a successful submission, and left only by reset.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// One screen of the booking wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    TreatmentSelect,
    PractitionerSelect,
    DateTimeSelect,
    Confirm,
    Success,
}

impl WizardStep {
    /// The canonical order of steps.
    pub const ORDER: [WizardStep; 5] = [
        WizardStep::TreatmentSelect,
        WizardStep::PractitionerSelect,
        WizardStep::DateTimeSelect,
        WizardStep::Confirm,
        WizardStep::Success,
    ];

    /// 1-based position shown in the progress indicator.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::TreatmentSelect => 1,
            WizardStep::PractitionerSelect => 2,
            WizardStep::DateTimeSelect => 3,
            WizardStep::Confirm => 4,
            WizardStep::Success => 5,
        }
    }

    /// Step reached by the "Next" button, or None where it does not apply.
    ///
    /// Confirm has no navigational successor: Success is only reachable by
    /// submitting.
    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::TreatmentSelect => Some(WizardStep::PractitionerSelect),
            WizardStep::PractitionerSelect => Some(WizardStep::DateTimeSelect),
            WizardStep::DateTimeSelect => Some(WizardStep::Confirm),
            WizardStep::Confirm | WizardStep::Success => None,
        }
    }

    /// Step reached by the "Previous" button, or None at the edges.
    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::PractitionerSelect => Some(WizardStep::TreatmentSelect),
            WizardStep::DateTimeSelect => Some(WizardStep::PractitionerSelect),
            WizardStep::Confirm => Some(WizardStep::DateTimeSelect),
            WizardStep::TreatmentSelect | WizardStep::Success => None,
        }
    }

    /// Short label for the progress indicator.
    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::TreatmentSelect => "Treatment",
            WizardStep::PractitionerSelect => "Practitioner",
            WizardStep::DateTimeSelect => "Date & Time",
            WizardStep::Confirm => "Confirm",
            WizardStep::Success => "Booked",
        }
    }
}

impl StateMachine for WizardStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use WizardStep::*;
        match self {
            TreatmentSelect => vec![PractitionerSelect],
            PractitionerSelect => vec![TreatmentSelect, DateTimeSelect],
            DateTimeSelect => vec![PractitionerSelect, Confirm],
            Confirm => vec![DateTimeSelect, Success],
            Success => vec![TreatmentSelect],
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_follow_order() {
        for (idx, step) in WizardStep::ORDER.iter().enumerate() {
            assert_eq!(step.number() as usize, idx + 1);
        }
    }

    #[test]
    fn next_and_previous_are_inverse_between_first_and_confirm() {
        for step in &WizardStep::ORDER[..3] {
            let next = step.next().unwrap();
            assert_eq!(next.previous(), Some(*step));
        }
    }

    #[test]
    fn confirm_has_no_navigational_next() {
        assert_eq!(WizardStep::Confirm.next(), None);
        assert!(WizardStep::Confirm.can_transition_to(&WizardStep::Success));
    }

    #[test]
    fn success_only_leads_back_to_start() {
        assert_eq!(WizardStep::Success.previous(), None);
        assert_eq!(
            WizardStep::Success.valid_transitions(),
            vec![WizardStep::TreatmentSelect]
        );
    }

    #[test]
    fn navigation_steps_are_valid_transitions() {
        for step in WizardStep::ORDER {
            for target in step.next().into_iter().chain(step.previous()) {
                assert!(step.can_transition_to(&target), "{:?} -> {:?}", step, target);
            }
        }
    }

    #[test]
    fn skipping_steps_is_rejected() {
        assert!(WizardStep::TreatmentSelect
            .transition_to(WizardStep::Confirm)
            .is_err());
    }
}
