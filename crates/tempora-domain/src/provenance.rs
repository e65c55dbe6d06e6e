//! Provenance of a normalization: which grammar matched, and which input
//! cleanup produced the string it matched on

use std::fmt;

/// Identifier of the grammar that produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchId {
    /// Four-digit year followed by a two-digit end year
    BriefDateRange,
    /// Native EDTF
    Edtf,
    /// Native EDTF found after an input cleanup
    EdtfCleaned,
    /// `18..` and English ordinal centuries
    CenturyNumeric,
    /// Roman numeral century
    CenturyRoman,
    /// Roman numeral century range
    CenturyRangeRoman,
    /// Three digits plus an unknown marker
    Decade,
    /// Numeric range with known digits
    NumericRangeAllVariants,
    /// Numeric range with unknown-digit markers
    NumericRangeAllVariantsXx,
    /// Numeric date with known digits
    NumericAllVariants,
    /// Numeric date with unknown-digit markers
    NumericAllVariantsXx,
    /// Space separated numeric date
    NumericSpacesVariant,
    /// DCMI period descriptor
    DcmiPeriod,
    /// Spelled-out month
    MonthName,
    /// Timestamp-like formatted date
    FormattedFullDate,
    /// BC/AD era notation
    BcAd,
    /// Signed year beyond four digits
    LongNegativeYear,
    /// Nothing recognized the input
    NoMatch,
    /// Recognized but semantically invalid
    Invalid,
}

impl MatchId {
    /// Stable identifier, as used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchId::BriefDateRange => "BRIEF_DATE_RANGE",
            MatchId::Edtf => "EDTF",
            MatchId::EdtfCleaned => "EDTF_CLEANED",
            MatchId::CenturyNumeric => "CENTURY_NUMERIC",
            MatchId::CenturyRoman => "CENTURY_ROMAN",
            MatchId::CenturyRangeRoman => "CENTURY_RANGE_ROMAN",
            MatchId::Decade => "DECADE",
            MatchId::NumericRangeAllVariants => "NUMERIC_RANGE_ALL_VARIANTS",
            MatchId::NumericRangeAllVariantsXx => "NUMERIC_RANGE_ALL_VARIANTS_XX",
            MatchId::NumericAllVariants => "NUMERIC_ALL_VARIANTS",
            MatchId::NumericAllVariantsXx => "NUMERIC_ALL_VARIANTS_XX",
            MatchId::NumericSpacesVariant => "NUMERIC_SPACES_VARIANT",
            MatchId::DcmiPeriod => "DCMI_PERIOD",
            MatchId::MonthName => "MONTH_NAME",
            MatchId::FormattedFullDate => "FORMATTED_FULL_DATE",
            MatchId::BcAd => "BC_AD",
            MatchId::LongNegativeYear => "LONG_NEGATIVE_YEAR",
            MatchId::NoMatch => "NO_MATCH",
            MatchId::Invalid => "INVALID",
        }
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input cleanup applied before a grammar matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SanitizeOperation {
    /// Drop everything up to the first `:`
    StartingTextUntilFirstColon,
    /// Drop a leading parenthesized run, up to the last `)`
    StartingParentheses,
    /// Drop a trailing parenthesized run
    EndingParentheses,
    /// `[circa X]` becomes `X`
    CaptureValueInSquareBracketsWithCirca,
    /// `[X]` becomes `X`
    CaptureValueInSquareBrackets,
    /// Drop a leading circa token
    StartingCirca,
    /// Drop a trailing `]`
    EndingClosingSquareBracket,
    /// Drop a trailing `.`
    EndingDot,
    /// Drop a trailing bracketed run
    EndingSquareBrackets,
    /// `(circa X)` becomes `X`
    CaptureValueInParenthesesWithCirca,
    /// `(X)` becomes `X`
    CaptureValueInParentheses,
}

impl SanitizeOperation {
    /// Stable identifier, as used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            SanitizeOperation::StartingTextUntilFirstColon => "STARTING_TEXT_UNTIL_FIRST_COLON",
            SanitizeOperation::StartingParentheses => "STARTING_PARENTHESES",
            SanitizeOperation::EndingParentheses => "ENDING_PARENTHESES",
            SanitizeOperation::CaptureValueInSquareBracketsWithCirca => {
                "CAPTURE_VALUE_IN_SQUARE_BRACKETS_WITH_CIRCA"
            }
            SanitizeOperation::CaptureValueInSquareBrackets => "CAPTURE_VALUE_IN_SQUARE_BRACKETS",
            SanitizeOperation::StartingCirca => "STARTING_CIRCA",
            SanitizeOperation::EndingClosingSquareBracket => "ENDING_CLOSING_SQUARE_BRACKET",
            SanitizeOperation::EndingDot => "ENDING_DOT",
            SanitizeOperation::EndingSquareBrackets => "ENDING_SQUARE_BRACKETS",
            SanitizeOperation::CaptureValueInParenthesesWithCirca => {
                "CAPTURE_VALUE_IN_PARENTHESES_WITH_CIRCA"
            }
            SanitizeOperation::CaptureValueInParentheses => "CAPTURE_VALUE_IN_PARENTHESES",
        }
    }

    /// Whether the removed text marked the value as approximate
    pub fn is_circa(&self) -> bool {
        matches!(
            self,
            SanitizeOperation::StartingCirca
                | SanitizeOperation::CaptureValueInSquareBracketsWithCirca
                | SanitizeOperation::CaptureValueInParenthesesWithCirca
        )
    }
}

impl fmt::Display for SanitizeOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
