//! Minute-precision time of day used for appointment start times and slots.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A wall-clock start time such as `09:30`.
///
/// Serialized as 24-hour `HH:MM`. Parsing also accepts the 12-hour
/// `h:MM AM/PM` form used by older records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Creates a time from hour and minute.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, ValidationError> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| ValidationError::invalid_format("time", "hour or minute out of range"))
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_since_midnight(&self) -> u32 {
        self.0.hour() * 60 + self.0.minute()
    }

    /// Returns the inner chrono time.
    pub fn as_naive_time(&self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NaiveTime::parse_from_str(s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(s, "%I:%M %p"))
            .map(Self)
            .map_err(|_| ValidationError::invalid_format("time", format!("expected HH:MM, got '{}'", s)))
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_24_hour_form() {
        let t: TimeOfDay = "09:30".parse().unwrap();
        assert_eq!(t.minutes_since_midnight(), 9 * 60 + 30);
        assert_eq!(t.to_string(), "09:30");
    }

    #[test]
    fn parses_12_hour_form() {
        let t: TimeOfDay = "2:00 PM".parse().unwrap();
        assert_eq!(t.to_string(), "14:00");
        let t: TimeOfDay = "10:00 AM".parse().unwrap();
        assert_eq!(t.to_string(), "10:00");
    }

    #[test]
    fn rejects_garbage() {
        assert!("noon".parse::<TimeOfDay>().is_err());
        assert!("25:00".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn orders_chronologically() {
        let a = TimeOfDay::from_hm(9, 0).unwrap();
        let b = TimeOfDay::from_hm(14, 30).unwrap();
        assert!(a < b);
    }

    #[test]
    fn serde_uses_hh_mm() {
        let t = TimeOfDay::from_hm(17, 0).unwrap();
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"17:00\"");
        let back: TimeOfDay = serde_json::from_str("\"5:00 PM\"").unwrap();
        assert_eq!(back, t);
    }
}
