//! Parsing helpers for path, query and body values.

use axum::extract::rejection::JsonRejection;
use axum::response::Response;
use axum::Json;
use chrono::NaiveDate;
use std::str::FromStr;

use super::error::bad_request;

/// Parses a `YYYY-MM-DD` value.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, Response> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| bad_request(format!("Invalid {}: expected YYYY-MM-DD, got '{}'", field, value)))
}

/// Parses any `FromStr` value, reporting `field` on failure.
pub fn parse_value<T: FromStr>(field: &str, value: &str) -> Result<T, Response> {
    value
        .trim()
        .parse()
        .map_err(|_| bad_request(format!("Invalid {}: '{}'", field, value)))
}

/// Parses an optional value, treating blank input as absent.
pub fn parse_optional<T: FromStr>(field: &str, value: Option<&str>) -> Result<Option<T>, Response> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => parse_value(field, v).map(Some),
        None => Ok(None),
    }
}

/// Unwraps a JSON body, reporting a missing, malformed or mistyped body as a
/// 400 failure envelope.
pub fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, Response> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| bad_request(format!("Invalid request body: {}", rejection.body_text())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn date_must_be_iso() {
        assert!(parse_date("date", "2024-01-20").is_ok());
        let err = parse_date("date", "20/01/2024").unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn blank_optional_is_none() {
        assert_eq!(parse_optional::<u32>("n", Some("  ")).unwrap(), None);
        assert_eq!(parse_optional::<u32>("n", Some("7")).unwrap(), Some(7));
        assert!(parse_optional::<u32>("n", Some("x")).is_err());
    }
}
