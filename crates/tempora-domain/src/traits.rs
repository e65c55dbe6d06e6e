//! Trait definitions for extraction strategies
//!
//! Concrete grammars live in the extractor crate.

use crate::DateNormalizationResult;

/// A single date grammar
///
/// Implementations are pure: the same input always yields the same result,
/// and a non-match is a normal outcome rather than an error.
pub trait DateExtractor {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Try to recognize `input`
    fn extract(&self, input: &str) -> DateNormalizationResult;
}
