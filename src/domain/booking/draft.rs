//! BookingDraft - the in-progress appointment built up across wizard steps.
//!
//! Field updates are pure: [`BookingDraft::apply`] takes the current draft and
//! returns the next one, or `None` when the update is rejected.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::{BookingCatalog, Practitioner};
use crate::domain::foundation::{PractitionerId, TimeOfDay, TreatmentId, ValidationError};

/// A single user edit to the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    Treatment(TreatmentId),
    Practitioner(PractitionerId),
    Date(NaiveDate),
    Time(TimeOfDay),
    Notes(String),
    Urgent(bool),
}

impl DraftField {
    /// Builds a field update from the form-field name and raw input value.
    ///
    /// Accepted names: `treatmentType`, `practitionerId`, `scheduledDate`,
    /// `scheduledTime`, `notes`, `isUrgent`.
    pub fn parse(name: &str, value: &str) -> Result<Self, ValidationError> {
        match name {
            "treatmentType" => Ok(DraftField::Treatment(TreatmentId::new(value)?)),
            "practitionerId" => value
                .parse()
                .map(DraftField::Practitioner)
                .map_err(|_| ValidationError::invalid_format(name, "expected a numeric id")),
            "scheduledDate" => NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
                .map(DraftField::Date)
                .map_err(|_| ValidationError::invalid_format(name, "expected YYYY-MM-DD")),
            "scheduledTime" => Ok(DraftField::Time(value.parse()?)),
            "notes" => Ok(DraftField::Notes(value.to_string())),
            "isUrgent" => match value {
                "true" | "on" | "1" => Ok(DraftField::Urgent(true)),
                "false" | "off" | "0" | "" => Ok(DraftField::Urgent(false)),
                _ => Err(ValidationError::invalid_format(name, "expected a boolean")),
            },
            other => Err(ValidationError::invalid_format("field", format!("unknown field '{}'", other))),
        }
    }
}

/// The reference lists an edit is checked against.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a> {
    pub catalog: &'a BookingCatalog,
    pub practitioners: &'a [Practitioner],
    pub slots: &'a [TimeOfDay],
    pub min_date: NaiveDate,
}

/// In-progress booking owned by a single wizard.
///
/// # Invariants
///
/// - `duration_minutes` is the selected treatment's fixed duration, and is
///   `None` until a treatment is chosen
/// - a selected practitioner is able to perform the selected treatment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDraft {
    treatment_id: Option<TreatmentId>,
    practitioner_id: Option<PractitionerId>,
    scheduled_date: Option<NaiveDate>,
    scheduled_time: Option<TimeOfDay>,
    duration_minutes: Option<u32>,
    notes: String,
    is_urgent: bool,
}

impl BookingDraft {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn treatment_id(&self) -> Option<&TreatmentId> {
        self.treatment_id.as_ref()
    }

    pub fn practitioner_id(&self) -> Option<PractitionerId> {
        self.practitioner_id
    }

    pub fn scheduled_date(&self) -> Option<NaiveDate> {
        self.scheduled_date
    }

    pub fn scheduled_time(&self) -> Option<TimeOfDay> {
        self.scheduled_time
    }

    /// Derived from the selected treatment.
    pub fn duration_minutes(&self) -> Option<u32> {
        self.duration_minutes
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn is_urgent(&self) -> bool {
        self.is_urgent
    }

    pub(crate) fn clear_time(&mut self) {
        self.scheduled_time = None;
    }

    /// Returns true if nothing has been entered yet.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Returns the draft with `field` applied, or `None` if the referenced
    /// treatment, practitioner, date or slot is not selectable.
    ///
    /// Choosing a treatment sets the duration and drops a practitioner who
    /// cannot perform it.
    pub fn apply(&self, field: DraftField, ctx: &SelectionContext<'_>) -> Option<BookingDraft> {
        let mut next = self.clone();
        match field {
            DraftField::Treatment(id) => {
                let treatment = ctx.catalog.treatment(&id)?;
                next.duration_minutes = Some(treatment.duration_minutes());
                if let Some(pid) = next.practitioner_id {
                    let still_capable = ctx
                        .catalog
                        .practitioner(pid)
                        .map(|p| p.can_perform(&id))
                        .unwrap_or(false);
                    if !still_capable {
                        next.practitioner_id = None;
                    }
                }
                next.treatment_id = Some(id);
            }
            DraftField::Practitioner(id) => {
                ctx.practitioners.iter().find(|p| p.id() == id)?;
                next.practitioner_id = Some(id);
            }
            DraftField::Date(date) => {
                if date < ctx.min_date {
                    return None;
                }
                next.scheduled_date = Some(date);
            }
            DraftField::Time(time) => {
                if !ctx.slots.contains(&time) {
                    return None;
                }
                next.scheduled_time = Some(time);
            }
            DraftField::Notes(notes) => next.notes = notes,
            DraftField::Urgent(flag) => next.is_urgent = flag,
        }
        Some(next)
    }
}
