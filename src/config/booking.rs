//! Booking rules configuration

use serde::Deserialize;

use crate::domain::foundation::TimeOfDay;

use super::error::ValidationError;

/// Booking configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BookingConfig {
    /// Days ahead of today the earliest booking may be made
    #[serde(default = "default_min_lead_days")]
    pub min_lead_days: u32,

    /// Daily start times (comma-separated `HH:MM`); clinic defaults when unset
    pub slot_times: Option<String>,

    /// Seed the in-memory stores with demonstration records
    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,
}

impl BookingConfig {
    /// Configured slot times, or `None` to use the clinic defaults.
    pub fn slot_times_list(&self) -> Option<Vec<String>> {
        self.slot_times.as_ref().map(|s| {
            s.split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect()
        })
    }

    /// Validate booking configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_lead_days == 0 || self.min_lead_days > 365 {
            return Err(ValidationError::InvalidLeadTime);
        }
        if let Some(times) = self.slot_times_list() {
            if times.is_empty() {
                return Err(ValidationError::EmptySlotTemplate);
            }
            for time in times {
                if time.parse::<TimeOfDay>().is_err() {
                    return Err(ValidationError::InvalidSlotTime(time));
                }
            }
        }
        Ok(())
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            min_lead_days: default_min_lead_days(),
            slot_times: None,
            seed_sample_data: default_seed_sample_data(),
        }
    }
}

fn default_min_lead_days() -> u32 {
    1
}

fn default_seed_sample_data() -> bool {
    true
}
