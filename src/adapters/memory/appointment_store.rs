//! In-memory appointment store.
//!
//! Backs the REST service when no database is configured. Ids come from a
//! monotonically increasing sequence; records live for the process lifetime.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use crate::domain::appointment::{Appointment, AppointmentStatus, NewAppointment};
use crate::domain::foundation::{
    AppointmentId, DomainError, ErrorCode, PatientId, PractitionerId, TimeOfDay,
};
use crate::ports::AppointmentRepository;

/// Appointment store held in process memory.
pub struct InMemoryAppointmentStore {
    appointments: RwLock<BTreeMap<AppointmentId, Appointment>>,
    sequence: AtomicU64,
}

impl InMemoryAppointmentStore {
    /// Creates an empty store whose first id is 1.
    pub fn new() -> Self {
        Self {
            appointments: RwLock::new(BTreeMap::new()),
            sequence: AtomicU64::new(1),
        }
    }

    /// Creates a store holding two demonstration appointments.
    pub fn with_sample_data() -> Result<Self, DomainError> {
        let store = Self::new();
        let day = NaiveDate::from_ymd_opt(2024, 1, 20)
            .ok_or_else(|| DomainError::new(ErrorCode::InternalError, "invalid sample date"))?;

        let mut consultation = NewAppointment::new(day, TimeOfDay::from_hm(10, 0)?, "Panchakarma Consultation");
        consultation.patient_id = Some(PatientId::new("P001")?);
        consultation.patient_name = Some("Rajesh Kumar".to_string());

        let mut follow_up = NewAppointment::new(day, TimeOfDay::from_hm(14, 0)?, "Follow-up");
        follow_up.patient_id = Some(PatientId::new("P002")?);
        follow_up.patient_name = Some("Priya Sharma".to_string());

        let first = Appointment::schedule(store.allocate(), consultation);
        let mut second = Appointment::schedule(store.allocate(), follow_up);
        second.transition_to(AppointmentStatus::Completed)?;

        {
            let mut map = store.write()?;
            map.insert(first.id(), first);
            map.insert(second.id(), second);
        }
        Ok(store)
    }

    /// Number of stored appointments.
    pub fn len(&self) -> usize {
        self.appointments.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn allocate(&self) -> AppointmentId {
        AppointmentId::new(self.sequence.fetch_add(1, Ordering::SeqCst))
    }

    fn read(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, BTreeMap<AppointmentId, Appointment>>, DomainError> {
        self.appointments
            .read()
            .map_err(|_| DomainError::new(ErrorCode::StorageError, "appointment store lock poisoned"))
    }

    fn write(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, BTreeMap<AppointmentId, Appointment>>, DomainError> {
        self.appointments
            .write()
            .map_err(|_| DomainError::new(ErrorCode::StorageError, "appointment store lock poisoned"))
    }
}

impl Default for InMemoryAppointmentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointmentStore {
    async fn next_id(&self) -> Result<AppointmentId, DomainError> {
        Ok(self.allocate())
    }

    async fn save(&self, appointment: &Appointment) -> Result<(), DomainError> {
        let mut map = self.write()?;
        if map.contains_key(&appointment.id()) {
            return Err(DomainError::new(
                ErrorCode::StorageError,
                format!("Appointment {} already exists", appointment.id()),
            ));
        }
        map.insert(appointment.id(), appointment.clone());
        Ok(())
    }

    async fn update(&self, appointment: &Appointment) -> Result<(), DomainError> {
        let mut map = self.write()?;
        match map.get_mut(&appointment.id()) {
            Some(slot) => {
                *slot = appointment.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::AppointmentNotFound,
                format!("Appointment not found: {}", appointment.id()),
            )),
        }
    }

    async fn find_by_id(&self, id: AppointmentId) -> Result<Option<Appointment>, DomainError> {
        Ok(self.read()?.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Appointment>, DomainError> {
        Ok(self.read()?.values().cloned().collect())
    }

    async fn find_by_practitioner_on(
        &self,
        practitioner_id: PractitionerId,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, DomainError> {
        Ok(self
            .read()?
            .values()
            .filter(|a| a.practitioner_id() == Some(practitioner_id) && a.date() == date)
            .cloned()
            .collect())
    }
}
