//! Static reference directory with the clinic's treatments, practitioners
//! and daily slot template.

use async_trait::async_trait;

use crate::domain::catalog::{BookingCatalog, Practitioner, TreatmentOption};
use crate::domain::foundation::{DomainError, PractitionerId, TimeOfDay, TreatmentId};
use crate::ports::ReferenceDirectory;

const TREATMENTS: &[(&str, &str, &str, u32)] = &[
    ("abhyanga", "Abhyanga", "Full body oil massage therapy", 60),
    ("shirodhara", "Shirodhara", "Continuous oil pouring on forehead", 90),
    ("swedana", "Swedana", "Herbal steam therapy", 45),
    ("panchakarma", "Panchakarma Consultation", "Treatment planning session", 30),
    ("nasya", "Nasya", "Nasal administration of medicines", 30),
    ("basti", "Basti", "Medicated enema therapy", 75),
];

const PRACTITIONERS: &[(u32, &str, &str, u8, f32, &[&str])] = &[
    (1, "Dr. Priya Sharma", "Panchakarma Specialist", 15, 4.9, &["abhyanga", "shirodhara", "swedana"]),
    (2, "Dr. Rajesh Kumar", "Ayurvedic Physician", 12, 4.8, &["panchakarma", "nasya", "basti"]),
    (3, "Dr. Meera Patel", "Women's Health Specialist", 10, 4.9, &["abhyanga", "shirodhara", "panchakarma"]),
];

/// Default start times: 09:00-11:30 and 14:00-17:00, every 30 minutes.
pub const DEFAULT_SLOT_TIMES: &[&str] = &[
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30",
    "14:00", "14:30", "15:00", "15:30", "16:00", "16:30", "17:00",
];

/// Reference directory built once at startup.
#[derive(Debug, Clone)]
pub struct StaticReferenceDirectory {
    catalog: BookingCatalog,
}

impl StaticReferenceDirectory {
    /// The clinic's standard treatments, practitioners and slots.
    pub fn clinic_defaults() -> Result<Self, DomainError> {
        Self::clinic_with_slots(DEFAULT_SLOT_TIMES)
    }

    /// The clinic's treatments and practitioners with a custom slot template.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a slot is not a valid time of day.
    pub fn clinic_with_slots<S: AsRef<str>>(slot_times: &[S]) -> Result<Self, DomainError> {
        let treatments = TREATMENTS
            .iter()
            .map(|(id, name, description, minutes)| {
                TreatmentOption::new(TreatmentId::new(*id)?, *name, *description, *minutes)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let practitioners = PRACTITIONERS
            .iter()
            .map(|(id, name, specialization, years, rating, capabilities)| {
                let capabilities = capabilities
                    .iter()
                    .map(|c| TreatmentId::new(*c))
                    .collect::<Result<Vec<_>, _>>()?;
                Practitioner::new(
                    PractitionerId::new(*id),
                    *name,
                    *specialization,
                    *years,
                    *rating,
                    capabilities,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        let slots = slot_times
            .iter()
            .map(|s| s.as_ref().parse::<TimeOfDay>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_catalog(BookingCatalog::new(treatments, practitioners, slots)))
    }

    pub fn from_catalog(catalog: BookingCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &BookingCatalog {
        &self.catalog
    }
}

#[async_trait]
impl ReferenceDirectory for StaticReferenceDirectory {
    async fn list_treatments(&self) -> Result<Vec<TreatmentOption>, DomainError> {
        Ok(self.catalog.treatments().to_vec())
    }

    async fn list_practitioners(&self) -> Result<Vec<Practitioner>, DomainError> {
        Ok(self.catalog.practitioners().to_vec())
    }

    async fn slot_template(&self) -> Result<Vec<TimeOfDay>, DomainError> {
        Ok(self.catalog.slot_template().to_vec())
    }

    async fn load_catalog(&self) -> Result<BookingCatalog, DomainError> {
        Ok(self.catalog.clone())
    }
}
