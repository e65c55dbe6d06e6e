//! Outcome of one normalization attempt

use crate::{serialize, AbstractEdtfDate, MatchId, SanitizeOperation};

/// Whether a grammar recognized the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchStatus {
    /// A date was extracted
    Matched,
    /// No date was extracted
    NoMatch,
}

/// Result of running a strategy (or the whole pipeline) on one input
///
/// A date is present if and only if the status is [`MatchStatus::Matched`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateNormalizationResult {
    status: MatchStatus,
    match_id: MatchId,
    date: Option<AbstractEdtfDate>,
    label: Option<String>,
    sanitize_operation: Option<SanitizeOperation>,
}

impl DateNormalizationResult {
    /// A successful match
    pub fn matched(match_id: MatchId, date: impl Into<AbstractEdtfDate>) -> Self {
        Self {
            status: MatchStatus::Matched,
            match_id,
            date: Some(date.into()),
            label: None,
            sanitize_operation: None,
        }
    }

    /// Nothing recognized the input
    pub fn no_match() -> Self {
        Self {
            status: MatchStatus::NoMatch,
            match_id: MatchId::NoMatch,
            date: None,
            label: None,
            sanitize_operation: None,
        }
    }

    /// Recognized, but rejected as semantically invalid
    pub fn invalid() -> Self {
        Self {
            match_id: MatchId::Invalid,
            ..Self::no_match()
        }
    }

    /// Attach a free-text label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Record the cleanup that preceded the match
    pub fn with_sanitize_operation(mut self, operation: SanitizeOperation) -> Self {
        self.sanitize_operation = Some(operation);
        self
    }

    /// Relabel the grammar that matched
    pub fn with_match_id(mut self, match_id: MatchId) -> Self {
        self.match_id = match_id;
        self
    }

    /// Replace the date, keeping the provenance
    pub fn map_date<F>(mut self, f: F) -> Self
    where
        F: FnOnce(AbstractEdtfDate) -> AbstractEdtfDate,
    {
        self.date = self.date.map(f);
        self
    }

    /// Match status
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Grammar that matched
    pub fn match_id(&self) -> MatchId {
        self.match_id
    }

    /// Extracted date
    pub fn date(&self) -> Option<&AbstractEdtfDate> {
        self.date.as_ref()
    }

    /// Free-text label (DCMI period name)
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Cleanup applied before the match
    pub fn sanitize_operation(&self) -> Option<SanitizeOperation> {
        self.sanitize_operation
    }

    /// Whether a date was extracted
    pub fn is_match(&self) -> bool {
        self.status == MatchStatus::Matched
    }

    /// Canonical EDTF string of the extracted date
    pub fn edtf(&self) -> Option<String> {
        self.date.as_ref().map(serialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InstantEdtfDate, Year};

    #[test]
    fn test_matched_result() {
        let result = DateNormalizationResult::matched(
            MatchId::Decade,
            InstantEdtfDate::from_year(Year::with_unspecified_digits(1800, 1).unwrap()),
        )
        .with_sanitize_operation(SanitizeOperation::EndingDot);

        assert!(result.is_match());
        assert_eq!(result.edtf().as_deref(), Some("180X"));
        assert_eq!(result.sanitize_operation(), Some(SanitizeOperation::EndingDot));
        assert_eq!(result.label(), None);

        let relabelled = result.with_match_id(MatchId::EdtfCleaned);
        assert_eq!(relabelled.match_id(), MatchId::EdtfCleaned);
        assert_eq!(relabelled.edtf().as_deref(), Some("180X"));
    }

    #[test]
    fn test_no_match_and_invalid_carry_no_date() {
        let none = DateNormalizationResult::no_match();
        assert_eq!(none.status(), MatchStatus::NoMatch);
        assert_eq!(none.match_id(), MatchId::NoMatch);
        assert!(none.date().is_none());

        let invalid = DateNormalizationResult::invalid();
        assert!(!invalid.is_match());
        assert_eq!(invalid.match_id(), MatchId::Invalid);
        assert_eq!(invalid.edtf(), None);
    }
}
