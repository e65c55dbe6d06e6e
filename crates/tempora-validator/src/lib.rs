//! Tempora Validator
//!
//! Calendar validation for normalized EDTF dates.
//!
//! The Validator provides:
//! - Month and day range checks (leap years included)
//! - Interval ordering checks that respect unknown digits
//! - Future date rejection against a reference date
//! - Year width limits
//!
//! # Examples
//!
//! ```
//! use tempora_domain::parse_canonical;
//! use tempora_validator::{ValidationConfig, ValidationStatus, Validator};
//!
//! let validator = Validator::new(ValidationConfig::strict());
//! let date = parse_canonical("1989-02-29").unwrap();
//! assert_eq!(validator.validate(&date).status, ValidationStatus::Rejected);
//! ```

#![warn(missing_docs)]

mod config;
mod validator;

pub use config::ValidationConfig;
pub use validator::{RejectionReason, ValidationResult, ValidationStatus, Validator};
