//! Request validation.
//!
//! These checks originally lived in the browser forms; they run here at
//! the HTTP boundary and reject with 400. The record store itself stays
//! permissive, so its merge and id-assignment semantics hold for any
//! structurally valid payload.

use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;
use serde_json::{Map, Value};

use crate::api::error::ApiError;

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}-\d{3}-\d{4}$").expect("phone pattern compiles"));

pub fn phone(value: &str) -> Result<(), ApiError> {
    if PHONE.is_match(value) {
        Ok(())
    } else {
        Err(ApiError::BadRequest(
            "Phone must match ddd-ddd-dddd".into(),
        ))
    }
}

pub fn positive_amount(value: f64) -> Result<(), ApiError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ApiError::BadRequest("Amount must be positive".into()))
    }
}

/// Appointments cannot be scheduled in the past.
pub fn appointment_date(value: NaiveDate) -> Result<(), ApiError> {
    if value < Local::now().date_naive() {
        Err(ApiError::BadRequest("Date cannot be in the past".into()))
    } else {
        Ok(())
    }
}

/// Billing records cannot be dated in the future.
pub fn billing_date(value: NaiveDate) -> Result<(), ApiError> {
    if value > Local::now().date_naive() {
        Err(ApiError::BadRequest("Date cannot be in the future".into()))
    } else {
        Ok(())
    }
}

fn patch_str<'a>(patch: &'a Map<String, Value>, key: &str) -> Result<Option<&'a str>, ApiError> {
    match patch.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(Some)
            .ok_or_else(|| ApiError::BadRequest(format!("{key} must be a string"))),
    }
}

fn patch_date(patch: &Map<String, Value>, key: &str) -> Result<Option<NaiveDate>, ApiError> {
    match patch_str(patch, key)? {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ApiError::BadRequest(format!("{key} must be YYYY-MM-DD"))),
    }
}

/// Validate the fields a patient patch may carry.
pub fn patient_patch(patch: &Map<String, Value>) -> Result<(), ApiError> {
    if let Some(value) = patch_str(patch, "phone")? {
        phone(value)?;
    }
    Ok(())
}

/// Validate the fields an appointment patch may carry.
pub fn appointment_patch(patch: &Map<String, Value>) -> Result<(), ApiError> {
    if let Some(date) = patch_date(patch, "date")? {
        appointment_date(date)?;
    }
    Ok(())
}

/// Validate the fields a billing patch may carry.
pub fn billing_patch(patch: &Map<String, Value>) -> Result<(), ApiError> {
    if let Some(value) = patch.get("amount") {
        let amount = value
            .as_f64()
            .ok_or_else(|| ApiError::BadRequest("amount must be a number".into()))?;
        positive_amount(amount)?;
    }
    if let Some(date) = patch_date(patch, "date")? {
        billing_date(date)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn patch(raw: &str) -> Map<String, Value> {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn phone_accepts_the_dashed_pattern() {
        assert!(phone("555-123-4567").is_ok());
    }

    #[test]
    fn phone_rejects_everything_else() {
        for bad in ["5551234567", "55-123-4567", "555-123-456", "abc-def-ghij", ""] {
            assert!(phone(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn amount_must_be_strictly_positive() {
        assert!(positive_amount(0.01).is_ok());
        assert!(positive_amount(0.0).is_err());
        assert!(positive_amount(-5.0).is_err());
    }

    #[test]
    fn appointment_today_is_allowed_yesterday_is_not() {
        let today = Local::now().date_naive();
        assert!(appointment_date(today).is_ok());
        assert!(appointment_date(today - Duration::days(1)).is_err());
    }

    #[test]
    fn billing_today_is_allowed_tomorrow_is_not() {
        let today = Local::now().date_naive();
        assert!(billing_date(today).is_ok());
        assert!(billing_date(today + Duration::days(1)).is_err());
    }

    #[test]
    fn patches_only_validate_present_fields() {
        assert!(patient_patch(&patch(r#"{"name":"B"}"#)).is_ok());
        assert!(patient_patch(&patch(r#"{"phone":"bad"}"#)).is_err());
        assert!(billing_patch(&patch(r#"{"description":"MRI"}"#)).is_ok());
        assert!(billing_patch(&patch(r#"{"amount":-1}"#)).is_err());
        assert!(appointment_patch(&patch(r#"{"time":"09:00"}"#)).is_ok());
        assert!(appointment_patch(&patch(r#"{"date":"1999-01-01"}"#)).is_err());
    }

    #[test]
    fn mistyped_patch_fields_are_rejected() {
        assert!(patient_patch(&patch(r#"{"phone":12345}"#)).is_err());
        assert!(billing_patch(&patch(r#"{"amount":"12"}"#)).is_err());
        assert!(appointment_patch(&patch(r#"{"date":20300101}"#)).is_err());
    }
}
