//! Tempora Domain Layer
//!
//! This crate contains the canonical date model for Tempora. It has ZERO
//! external dependencies and defines the value objects, the canonical EDTF
//! serializer and the trait interface that every extraction strategy implements.
//!
//! ## Key Concepts
//!
//! - **Instant**: a single, possibly partial, point on the calendar
//! - **Interval**: a range between two instants, either side may be open
//! - **Qualification**: uncertain (`?`), approximate (`~`) or both (`%`)
//! - **Match ID**: the grammar that recognized an input
//! - **Canonical form**: the EDTF string every date serializes to
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Every type is an immutable value object
//! - Grammars and calendar validation live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod canonical;
pub mod instant;
pub mod interval;
pub mod provenance;
pub mod result;
pub mod traits;
pub mod year;

// Re-exports for convenience
pub use canonical::{parse_canonical, serialize};
pub use instant::{DatePart, EdgeType, InstantEdtfDate, Qualification};
pub use interval::{AbstractEdtfDate, IntervalEdtfDate};
pub use provenance::{MatchId, SanitizeOperation};
pub use result::{DateNormalizationResult, MatchStatus};
pub use traits::DateExtractor;
pub use year::{Year, MAX_SHORT_YEAR, MAX_YEAR_MAGNITUDE};
