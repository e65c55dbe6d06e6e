//! Negative years beyond four digits: `-12345`

use std::sync::LazyLock;

use regex::Regex;
use tempora_domain::{
    DateExtractor, DateNormalizationResult, InstantEdtfDate, IntervalEdtfDate, MatchId, Year,
    MAX_SHORT_YEAR,
};

use crate::parsing::{digits::parse_number, uncertain_if};

static LONG_NEGATIVE_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<lq>\?)?-(?P<digits>[0-9]{5,9})(?P<rq>\?)?$")
        .expect("Invalid long negative year regex")
});

fn parse_year(input: &str) -> Option<InstantEdtfDate> {
    let caps = LONG_NEGATIVE_YEAR.captures(input)?;
    let magnitude = parse_number(&caps["digits"])?;
    if magnitude <= MAX_SHORT_YEAR {
        return None;
    }
    let marked = caps.name("lq").is_some() || caps.name("rq").is_some();
    Some(InstantEdtfDate::from_year(Year::new(-magnitude)).with_qualification(uncertain_if(marked)))
}

/// A single negative year of 5 to 9 digits, rendered with the `Y` prefix
pub struct LongNegativeYearExtractor;

impl DateExtractor for LongNegativeYearExtractor {
    fn name(&self) -> &'static str {
        "long_negative_year"
    }

    fn extract(&self, input: &str) -> DateNormalizationResult {
        parse_year(input.trim())
            .map(|date| DateNormalizationResult::matched(MatchId::LongNegativeYear, date))
            .unwrap_or_else(DateNormalizationResult::no_match)
    }
}

/// Two long negative years joined by `/`
pub struct LongNegativeYearRangeExtractor;

impl LongNegativeYearRangeExtractor {
    fn parse(input: &str) -> Option<IntervalEdtfDate> {
        let (start, end) = input.split_once('/')?;
        IntervalEdtfDate::new(parse_year(start)?, parse_year(end)?)
    }
}

impl DateExtractor for LongNegativeYearRangeExtractor {
    fn name(&self) -> &'static str {
        "long_negative_year_range"
    }

    fn extract(&self, input: &str) -> DateNormalizationResult {
        Self::parse(input.trim())
            .map(|date| DateNormalizationResult::matched(MatchId::LongNegativeYear, date))
            .unwrap_or_else(DateNormalizationResult::no_match)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(input: &str) -> Option<String> {
        LongNegativeYearExtractor.extract(input).edtf()
    }

    fn range(input: &str) -> Option<String> {
        LongNegativeYearRangeExtractor.extract(input).edtf()
    }

    #[test]
    fn test_single_years() {
        assert_eq!(single("-12345").as_deref(), Some("Y-12345"));
        assert_eq!(single("-123456789").as_deref(), Some("Y-123456789"));
        assert_eq!(single("-12345?").as_deref(), Some("Y-12345?"));
        assert_eq!(single("?-12345").as_deref(), Some("Y-12345?"));
    }

    #[test]
    fn test_width_limits() {
        assert_eq!(single("-1234"), None);
        assert_eq!(single("-09999"), None);
        assert_eq!(single("-1234567890"), None);
        assert_eq!(single("12345"), None);
        assert_eq!(single("--12345"), None);
    }

    #[test]
    fn test_ranges() {
        assert_eq!(range("-123456/-12345").as_deref(), Some("Y-123456/Y-12345"));
        assert_eq!(range("-123456?/-12345").as_deref(), Some("Y-123456?/Y-12345"));
        assert_eq!(range("-123456/-1234"), None);
        assert_eq!(range("-123456//-12345"), None);
        assert_eq!(
            LongNegativeYearRangeExtractor.extract("-123456/-12345").match_id(),
            MatchId::LongNegativeYear
        );
    }
}
