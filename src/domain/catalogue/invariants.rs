use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

use super::entity::CatalogueStatus;
use crate::domain::{DomainError, DomainResult};

fn text_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9 .,!?&'\-\(\)]+$").unwrap())
}

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z ]+$").unwrap())
}

/// Validates a free-text field: must be a string, non-empty after trimming,
/// and only letters, digits, spaces and common punctuation. Returns the
/// trimmed value.
pub fn validate_text(value: Option<&Value>, field: &str) -> DomainResult<String> {
    let value = require_string(value, field)?;
    if !text_pattern().is_match(value) {
        return Err(DomainError::Validation(format!(
            "Invalid input for {}! Only letters, numbers, spaces, \
             and common punctuation (.,!?-&'()) are allowed.",
            field
        )));
    }
    Ok(value.trim().to_string())
}

/// Validates a name field: must be a string, non-empty after trimming,
/// letters and spaces only. Returns the trimmed value.
pub fn validate_name(value: Option<&Value>, field: &str) -> DomainResult<String> {
    let value = require_string(value, field)?;
    if !name_pattern().is_match(value) {
        return Err(DomainError::Validation(format!(
            "Invalid input for {}! Only letters and spaces are allowed.",
            field
        )));
    }
    Ok(value.trim().to_string())
}

/// Validates an identifier: present, parseable as an integer, strictly
/// positive.
pub fn validate_id(value: Option<&str>, field: &str) -> DomainResult<i64> {
    let value = match value {
        Some(v) if !v.trim().is_empty() => v.trim(),
        _ => {
            return Err(DomainError::Validation(format!(
                "{} cannot be empty.",
                field
            )))
        }
    };

    let parsed: i64 = value.parse().map_err(|_| {
        DomainError::Validation(format!(
            "Invalid input for {}! Please enter a valid number.",
            field
        ))
    })?;

    if parsed <= 0 {
        return Err(DomainError::Validation(format!(
            "{} must be a positive number.",
            field
        )));
    }
    Ok(parsed)
}

/// Validates a calendar date: must be a string in YYYY-MM-DD form.
pub fn validate_date(value: Option<&Value>, field: &str) -> DomainResult<NaiveDate> {
    let value = require_string(value, field)?;
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        DomainError::Validation(format!(
            "Invalid {}! Expected a valid date in YYYY-MM-DD format.",
            field
        ))
    })
}

/// Validates a status field, normalizing case.
pub fn validate_status(value: Option<&Value>, field: &str) -> DomainResult<CatalogueStatus> {
    let value = require_string(value, field)?;
    let normalized = value.trim().to_lowercase();
    CatalogueStatus::parse(&normalized).ok_or_else(|| {
        DomainError::Validation(format!(
            "Invalid {}! Must be one of: active, inactive, upcoming, expired.",
            field
        ))
    })
}

/// Cross-field rule: a catalogue cannot end before it starts.
pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> DomainResult<()> {
    if start > end {
        return Err(DomainError::Validation(
            "Start date cannot be after end date.".to_string(),
        ));
    }
    Ok(())
}

/// Fields arrive as raw JSON values; anything that is present but not a
/// string (a number, a bool, an array) is its own failure, distinct from
/// absence.
fn require_string<'a>(value: Option<&'a Value>, field: &str) -> DomainResult<&'a str> {
    let value = match value {
        None | Some(Value::Null) => {
            return Err(DomainError::Validation(format!(
                "{} cannot be empty.",
                field
            )))
        }
        Some(Value::String(s)) => s.as_str(),
        Some(_) => {
            return Err(DomainError::Validation(format!(
                "{} must be a string.",
                field
            )))
        }
    };

    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!(
            "{} cannot be empty.",
            field
        )));
    }
    Ok(value)
}
