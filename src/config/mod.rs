//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `AYURSUTRA` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use ayursutra_booking::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod booking;
mod error;
mod server;

pub use booking::BookingConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// development configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Booking rules (lead time, slot template, sample data)
    #[serde(default)]
    pub booking: BookingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AYURSUTRA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AYURSUTRA__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `AYURSUTRA__BOOKING__SLOT_TIMES=09:00,09:30` -> `booking.slot_times`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AYURSUTRA")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.booking.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("AYURSUTRA__SERVER__PORT");
        env::remove_var("AYURSUTRA__SERVER__ENVIRONMENT");
        env::remove_var("AYURSUTRA__BOOKING__MIN_LEAD_DAYS");
        env::remove_var("AYURSUTRA__BOOKING__SLOT_TIMES");
    }

    #[test]
    fn test_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.port, 5000);
        assert_eq!(config.booking.min_lead_days, 1);
        assert!(config.validate().is_ok());
        assert!(!config.server.is_production());
    }

    #[test]
    fn test_nested_values_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AYURSUTRA__SERVER__PORT", "3000");
        env::set_var("AYURSUTRA__SERVER__ENVIRONMENT", "production");
        env::set_var("AYURSUTRA__BOOKING__MIN_LEAD_DAYS", "2");
        env::set_var("AYURSUTRA__BOOKING__SLOT_TIMES", "09:00,10:00");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.server.is_production());
        assert_eq!(config.booking.min_lead_days, 2);
        assert_eq!(
            config.booking.slot_times_list().unwrap(),
            vec!["09:00", "10:00"]
        );
    }

    #[test]
    fn test_invalid_lead_time_fails_validation() {
        let config = AppConfig {
            booking: BookingConfig {
                min_lead_days: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidLeadTime));
    }
}
