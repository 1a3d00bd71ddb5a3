//! ListAvailableSlotsHandler - Query handler for the start times offered on a date.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::booking::rules;
use crate::domain::foundation::{DomainError, TimeOfDay};
use crate::ports::ReferenceDirectory;

#[derive(Debug, Clone)]
pub struct ListAvailableSlotsQuery {
    pub date: NaiveDate,
    pub today: NaiveDate,
}

/// Result with the earliest bookable date, for clients rendering a date picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableSlots {
    pub date: NaiveDate,
    pub min_date: NaiveDate,
    pub slots: Vec<TimeOfDay>,
}

pub struct ListAvailableSlotsHandler {
    directory: Arc<dyn ReferenceDirectory>,
    min_lead_days: u32,
}

impl ListAvailableSlotsHandler {
    pub fn new(directory: Arc<dyn ReferenceDirectory>, min_lead_days: u32) -> Self {
        Self {
            directory,
            min_lead_days,
        }
    }

    pub async fn handle(&self, query: ListAvailableSlotsQuery) -> Result<AvailableSlots, DomainError> {
        let min_date = rules::min_booking_date(query.today, self.min_lead_days);
        if query.date < min_date {
            return Err(DomainError::validation(
                "date",
                format!("Bookings open from {}", min_date),
            ));
        }

        let template = self.directory.slot_template().await?;
        Ok(AvailableSlots {
            date: query.date,
            min_date,
            slots: rules::available_slots(Some(query.date), &template),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Practitioner, TreatmentOption};
    use crate::domain::foundation::ErrorCode;
    use async_trait::async_trait;

    struct StubDirectory;

    #[async_trait]
    impl ReferenceDirectory for StubDirectory {
        async fn list_treatments(&self) -> Result<Vec<TreatmentOption>, DomainError> {
            Ok(vec![])
        }

        async fn list_practitioners(&self) -> Result<Vec<Practitioner>, DomainError> {
            Ok(vec![])
        }

        async fn slot_template(&self) -> Result<Vec<TimeOfDay>, DomainError> {
            Ok(vec![TimeOfDay::from_hm(9, 0).unwrap(), TimeOfDay::from_hm(14, 0).unwrap()])
        }
    }

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    #[tokio::test]
    async fn tomorrow_offers_full_template() {
        let handler = ListAvailableSlotsHandler::new(Arc::new(StubDirectory), 1);
        let result = handler
            .handle(ListAvailableSlotsQuery { date: d(11), today: d(10) })
            .await
            .unwrap();
        assert_eq!(result.min_date, d(11));
        assert_eq!(result.slots.len(), 2);
    }

    #[tokio::test]
    async fn today_is_rejected() {
        let handler = ListAvailableSlotsHandler::new(Arc::new(StubDirectory), 1);
        let err = handler
            .handle(ListAvailableSlotsQuery { date: d(10), today: d(10) })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn longer_lead_time_moves_min_date() {
        let handler = ListAvailableSlotsHandler::new(Arc::new(StubDirectory), 3);
        assert!(handler
            .handle(ListAvailableSlotsQuery { date: d(12), today: d(10) })
            .await
            .is_err());
    }
}
