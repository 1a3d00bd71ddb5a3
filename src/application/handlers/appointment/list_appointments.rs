//! ListAppointmentsHandler - Query handler for the appointment list.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::appointment::{Appointment, AppointmentError, AppointmentStatus};
use crate::domain::foundation::PractitionerId;
use crate::ports::AppointmentRepository;

/// Query for appointments, optionally narrowed.
#[derive(Debug, Clone, Default)]
pub struct ListAppointmentsQuery {
    pub date: Option<NaiveDate>,
    pub practitioner_id: Option<PractitionerId>,
    pub status: Option<AppointmentStatus>,
}

impl ListAppointmentsQuery {
    fn matches(&self, appointment: &Appointment) -> bool {
        self.date.map_or(true, |d| appointment.date() == d)
            && self
                .practitioner_id
                .map_or(true, |p| appointment.practitioner_id() == Some(p))
            && self.status.map_or(true, |s| appointment.status() == s)
    }
}

/// Handler for listing appointments in date/time order.
pub struct ListAppointmentsHandler {
    repository: Arc<dyn AppointmentRepository>,
}

impl ListAppointmentsHandler {
    pub fn new(repository: Arc<dyn AppointmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListAppointmentsQuery,
    ) -> Result<Vec<Appointment>, AppointmentError> {
        let mut appointments: Vec<Appointment> = self
            .repository
            .list()
            .await?
            .into_iter()
            .filter(|a| query.matches(a))
            .collect();
        appointments.sort_by_key(|a| (a.date(), a.time(), a.id()));
        Ok(appointments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::appointment::NewAppointment;
    use crate::domain::foundation::{AppointmentId, DomainError, TimeOfDay};
    use async_trait::async_trait;

    struct MockRepository {
        appointments: Vec<Appointment>,
    }

    #[async_trait]
    impl AppointmentRepository for MockRepository {
        async fn next_id(&self) -> Result<AppointmentId, DomainError> {
            Ok(AppointmentId::new(1))
        }

        async fn save(&self, _appointment: &Appointment) -> Result<(), DomainError> {
            Ok(())
        }

        async fn update(&self, _appointment: &Appointment) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(&self, _id: AppointmentId) -> Result<Option<Appointment>, DomainError> {
            Ok(None)
        }

        async fn list(&self) -> Result<Vec<Appointment>, DomainError> {
            Ok(self.appointments.clone())
        }

        async fn find_by_practitioner_on(
            &self,
            _practitioner_id: PractitionerId,
            _date: NaiveDate,
        ) -> Result<Vec<Appointment>, DomainError> {
            Ok(vec![])
        }
    }

    fn appt(id: u64, day: u32, hour: u32, practitioner: Option<u32>) -> Appointment {
        let mut details = NewAppointment::new(
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            TimeOfDay::from_hm(hour, 0).unwrap(),
            "Consultation",
        );
        details.practitioner_id = practitioner.map(PractitionerId::new);
        Appointment::schedule(AppointmentId::new(id), details)
    }

    #[tokio::test]
    async fn lists_in_chronological_order() {
        let handler = ListAppointmentsHandler::new(Arc::new(MockRepository {
            appointments: vec![appt(1, 21, 9, None), appt(2, 20, 14, None), appt(3, 20, 10, None)],
        }));

        let ids: Vec<u64> = handler
            .handle(ListAppointmentsQuery::default())
            .await
            .unwrap()
            .iter()
            .map(|a| a.id().value())
            .collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn filters_by_practitioner_and_date() {
        let handler = ListAppointmentsHandler::new(Arc::new(MockRepository {
            appointments: vec![appt(1, 20, 9, Some(1)), appt(2, 20, 10, Some(2)), appt(3, 21, 9, Some(1))],
        }));

        let found = handler
            .handle(ListAppointmentsQuery {
                date: NaiveDate::from_ymd_opt(2024, 1, 20),
                practitioner_id: Some(PractitionerId::new(1)),
                status: None,
            })
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id(), AppointmentId::new(1));
    }
}
