//! Date validation logic

use chrono::{Datelike, NaiveDate, Utc};
use tempora_domain::{AbstractEdtfDate, DatePart, InstantEdtfDate, Year, MAX_YEAR_MAGNITUDE};
use tracing::trace;

use crate::ValidationConfig;

/// Result of date validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the date passed validation
    pub status: ValidationStatus,

    /// Rejection reasons (if any)
    pub reasons: Vec<RejectionReason>,
}

impl ValidationResult {
    /// Whether the date was accepted
    pub fn is_valid(&self) -> bool {
        self.status == ValidationStatus::Accepted
    }
}

/// Validation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    /// Date accepted
    Accepted,

    /// Date rejected
    Rejected,
}

/// Reasons for rejection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// Month outside 1-12
    MonthOutOfRange {
        /// Month as written
        month: u8,
    },

    /// Day does not exist in its month
    DayOutOfRange {
        /// Year of the date
        year: i64,
        /// Month of the date, when known
        month: Option<u8>,
        /// Day as written
        day: u8,
    },

    /// Interval starts after it ends
    IntervalOrder {
        /// Canonical start
        start: String,
        /// Canonical end
        end: String,
    },

    /// Date lies after the reference date
    FutureDate {
        /// Canonical date
        date: String,
        /// Reference date used
        reference: NaiveDate,
    },

    /// Year magnitude beyond nine digits
    YearOutOfRange(i64),
}

/// The Validator checks normalized dates against calendar rules
#[derive(Debug, Clone)]
pub struct Validator {
    config: ValidationConfig,
}

type DateKey = (i64, u8, u8);

impl Validator {
    /// Create a new Validator with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Create a Validator with default configuration
    pub fn default_config() -> Self {
        Self::new(ValidationConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a date against the configured rules
    ///
    /// # Arguments
    ///
    /// * `date` - The normalized date to check
    ///
    /// # Returns
    ///
    /// A validation result listing every rule the date breaks
    pub fn validate(&self, date: &AbstractEdtfDate) -> ValidationResult {
        let mut reasons = Vec::new();
        let instants = date.instants();

        // 1. Per-instant checks
        for instant in instants.iter().filter(|i| i.is_known()) {
            self.validate_instant(instant, &mut reasons);
        }

        // 2. Interval ordering
        if self.config.validate_ordering {
            if let AbstractEdtfDate::Interval(interval) = date {
                if let Some(reason) = Self::validate_ordering(interval.start(), interval.end()) {
                    reasons.push(reason);
                }
            }
        }

        // 3. Future dates
        if self.config.reject_future {
            let reference = self
                .config
                .reference_date
                .unwrap_or_else(|| Utc::now().date_naive());
            for instant in instants.iter().filter(|i| i.is_known()) {
                if let Some(reason) = Self::validate_not_in_future(instant, reference) {
                    reasons.push(reason);
                }
            }
        }

        for reason in &reasons {
            trace!("Date {} rejected: {:?}", date, reason);
        }

        let status = if reasons.is_empty() {
            ValidationStatus::Accepted
        } else {
            ValidationStatus::Rejected
        };

        ValidationResult { status, reasons }
    }

    fn validate_instant(&self, instant: &InstantEdtfDate, reasons: &mut Vec<RejectionReason>) {
        let year = instant.year();
        if year.value().abs() > MAX_YEAR_MAGNITUDE {
            reasons.push(RejectionReason::YearOutOfRange(year.value()));
        }
        if !self.config.validate_calendar {
            return;
        }

        let month = instant.month().and_then(|m| m.value());
        if let Some(month) = month {
            if !(1..=12).contains(&month) {
                reasons.push(RejectionReason::MonthOutOfRange { month });
                return;
            }
        }
        if let Some(DatePart::Known(day)) = instant.day() {
            if !Self::day_exists(year, month, day) {
                reasons.push(RejectionReason::DayOutOfRange {
                    year: year.value(),
                    month,
                    day,
                });
            }
        }
    }

    /// Whether `day` can occur in `month` of `year`
    ///
    /// Years with unknown digits are checked against a leap year. The
    /// Gregorian cycle repeats every 400 years, so any year maps onto chrono's
    /// supported range without changing its leap status.
    fn day_exists(year: Year, month: Option<u8>, day: u8) -> bool {
        if !(1..=31).contains(&day) {
            return false;
        }
        let Some(month) = month else {
            return true;
        };
        let probe_year = if year.is_fully_known() {
            2000 + year.value().rem_euclid(400)
        } else {
            2000
        };
        i32::try_from(probe_year)
            .ok()
            .and_then(|y| NaiveDate::from_ymd_opt(y, u32::from(month), u32::from(day)))
            .is_some()
    }

    /// Validate that the earliest possible start is not after the latest possible end
    fn validate_ordering(start: &InstantEdtfDate, end: &InstantEdtfDate) -> Option<RejectionReason> {
        if !start.is_known() || !end.is_known() {
            return None;
        }
        if Self::earliest(start) > Self::latest(end) {
            return Some(RejectionReason::IntervalOrder {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        None
    }

    fn validate_not_in_future(instant: &InstantEdtfDate, reference: NaiveDate) -> Option<RejectionReason> {
        let reference_key = (
            i64::from(reference.year()),
            reference.month() as u8,
            reference.day() as u8,
        );
        if Self::earliest(instant) > reference_key {
            return Some(RejectionReason::FutureDate {
                date: instant.to_string(),
                reference,
            });
        }
        None
    }

    fn earliest(instant: &InstantEdtfDate) -> DateKey {
        let (year, _) = instant.year().bounds();
        (
            year,
            instant.month().and_then(|m| m.value()).unwrap_or(1),
            instant.day().and_then(|d| d.value()).unwrap_or(1),
        )
    }

    fn latest(instant: &InstantEdtfDate) -> DateKey {
        let (_, year) = instant.year().bounds();
        (
            year,
            instant.month().and_then(|m| m.value()).unwrap_or(12),
            instant.day().and_then(|d| d.value()).unwrap_or(31),
        )
    }
}
