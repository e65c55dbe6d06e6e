//! Validator configuration

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Configuration for validation rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Enable month range and day-of-month checks
    pub validate_calendar: bool,

    /// Enable interval start/end ordering checks
    pub validate_ordering: bool,

    /// Reject dates after the reference date
    pub reject_future: bool,

    /// Reference date for future checks (today, UTC, when unset)
    pub reference_date: Option<NaiveDate>,
}

impl Default for ValidationConfig {
    /// Ordering only: numeric grammars keep their calendar leniency
    fn default() -> Self {
        Self {
            validate_calendar: false,
            validate_ordering: true,
            reject_future: false,
            reference_date: None,
        }
    }
}

impl ValidationConfig {
    /// Create a permissive configuration (year width only)
    pub fn permissive() -> Self {
        Self {
            validate_calendar: false,
            validate_ordering: false,
            reject_future: false,
            reference_date: None,
        }
    }

    /// Create a strict configuration (all validations enabled)
    pub fn strict() -> Self {
        Self {
            validate_calendar: true,
            validate_ordering: true,
            reject_future: true,
            reference_date: None,
        }
    }

    /// Same configuration with a fixed reference date
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }
}
