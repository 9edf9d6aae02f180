use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::invariants::{
    validate_date, validate_date_range, validate_name, validate_status, validate_text,
};
use crate::domain::DomainResult;

/// Represents one catalogue record (a named date range with a status)
/// This is the root entity for everything the backend manages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalogue {
    /// Store-assigned identifier; `None` until persisted
    pub id: Option<i64>,

    /// Display name (letters and spaces only)
    pub name: String,

    /// Free-text description (letters, digits, spaces, limited punctuation)
    pub description: String,

    /// First day the catalogue is in effect
    pub start_date: NaiveDate,

    /// Last day the catalogue is in effect (never before start_date)
    pub end_date: NaiveDate,

    /// Current lifecycle status
    pub status: CatalogueStatus,
}

/// Lifecycle status of a catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogueStatus {
    Active,
    Inactive,
    Upcoming,
    Expired,
}

impl fmt::Display for CatalogueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CatalogueStatus::Active => "active",
            CatalogueStatus::Inactive => "inactive",
            CatalogueStatus::Upcoming => "upcoming",
            CatalogueStatus::Expired => "expired",
        };
        write!(f, "{}", s)
    }
}

impl CatalogueStatus {
    /// Parse an already-normalized (lowercase) status string.
    /// Callers normalize through `validate_status`; this is the storage-side
    /// counterpart used when mapping rows back into entities.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(CatalogueStatus::Active),
            "inactive" => Some(CatalogueStatus::Inactive),
            "upcoming" => Some(CatalogueStatus::Upcoming),
            "expired" => Some(CatalogueStatus::Expired),
            _ => None,
        }
    }
}

/// Raw caller-supplied fields, exactly as they arrived in a request body.
/// Fields stay as raw JSON values so that a missing key, a blank string and
/// a wrong-typed value (e.g. a number where a string belongs) all fail
/// through the validators, not the deserializer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogueInput {
    pub name: Option<serde_json::Value>,
    pub description: Option<serde_json::Value>,
    pub start_date: Option<serde_json::Value>,
    pub end_date: Option<serde_json::Value>,
    pub status: Option<serde_json::Value>,
}

impl Catalogue {
    /// Build a Catalogue from raw input, running every field validator in
    /// fixed order (name, description, start date, end date, status) followed
    /// by the start <= end cross-check. The first failure wins; no error
    /// aggregation. This is the only way to construct a Catalogue from
    /// untrusted data.
    pub fn from_input(input: &CatalogueInput) -> DomainResult<Self> {
        let name = validate_name(input.name.as_ref(), "Catalogue Name")?;
        let description = validate_text(input.description.as_ref(), "Description")?;
        let start_date = validate_date(input.start_date.as_ref(), "Start Date")?;
        let end_date = validate_date(input.end_date.as_ref(), "End Date")?;
        let status = validate_status(input.status.as_ref(), "Status")?;

        validate_date_range(start_date, end_date)?;

        Ok(Self {
            id: None,
            name,
            description,
            start_date,
            end_date,
            status,
        })
    }

    /// Attach the store-assigned identifier
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
