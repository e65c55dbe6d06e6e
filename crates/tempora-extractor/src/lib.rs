//! Tempora Extractor
//!
//! Recognizes free-text historical date values and normalizes them to
//! canonical EDTF.
//!
//! # Overview
//!
//! Catalogue records spell dates in dozens of conventions: two-digit year
//! ranges, Roman centuries, BC/AD in several languages, `X`/`U`/`-`/`?`
//! placeholders, month names, DCMI period descriptors, or plain EDTF. Each
//! convention is handled by one stateless strategy, and the pipeline tries
//! them in a fixed order.
//!
//! # Architecture
//!
//! ```text
//! value → pre-sanitize → strategies ─┬─ match → approximate override → validate & fix
//!                         ↑          │
//!                         └ sanitize ┘ (no match)
//! ```
//!
//! # Key Features
//!
//! - **Fixed precedence**: grammar order is a const array, never a registry
//! - **Sanitizing**: brackets, notes and circa markers are stripped in passes
//! - **Repair**: reversed intervals and swapped day/month are fixed on validation failure
//! - **Provenance**: every result names its grammar and sanitize operation
//!
//! # Example Usage
//!
//! ```
//! use tempora_extractor::{DatesNormalizer, NormalizerConfig};
//!
//! # fn example() -> Result<(), tempora_extractor::NormalizerError> {
//! let normalizer = DatesNormalizer::new(NormalizerConfig::default())?;
//!
//! let result = normalizer.normalize_date_property("[ca. 1920-1930]");
//! assert_eq!(result.edtf().as_deref(), Some("1920~/1930~"));
//!
//! let result = normalizer.normalize_generic_property("1989");
//! assert!(!result.is_match());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod normalizer;
pub(crate) mod parsing;
mod sanitizer;
pub mod strategies;

#[cfg(test)]
mod tests;

pub use config::NormalizerConfig;
pub use error::NormalizerError;
pub use normalizer::DatesNormalizer;
pub use sanitizer::{apply_operation, sanitize, SanitizePass, SanitizedValue};
pub use strategies::{Strategy, DATE_PROPERTY_ORDER, GENERIC_PROPERTY_ORDER};
