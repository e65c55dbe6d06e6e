//! Abbreviated year ranges: `2014/15`, `1889-98?`

use std::sync::LazyLock;

use regex::Regex;
use tempora_domain::{
    DateExtractor, DateNormalizationResult, InstantEdtfDate, IntervalEdtfDate, MatchId, Year,
};

use crate::parsing::{digits::parse_number, uncertain_if};

static BRIEF_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<start>[0-9]{4})[/-](?P<end>[0-9]{2})(?P<uncertain>\?)?$")
        .expect("Invalid brief range regex")
});

/// Four-digit start year followed by the last two digits of the end year
///
/// The two digits must exceed 12, otherwise `1900/01` could be a year and
/// month, and the expanded end must come after the start.
pub struct BriefRangeExtractor;

impl BriefRangeExtractor {
    fn parse(input: &str) -> Option<IntervalEdtfDate> {
        let caps = BRIEF_RANGE.captures(input)?;
        let start = parse_number(&caps["start"])?;
        let suffix = parse_number(&caps["end"])?;
        if suffix <= 12 {
            return None;
        }
        let end = start / 100 * 100 + suffix;
        if end <= start {
            return None;
        }

        let qualification = uncertain_if(caps.name("uncertain").is_some());
        IntervalEdtfDate::new(
            InstantEdtfDate::from_year(Year::new(start)).with_qualification(qualification),
            InstantEdtfDate::from_year(Year::new(end)).with_qualification(qualification),
        )
    }
}

impl DateExtractor for BriefRangeExtractor {
    fn name(&self) -> &'static str {
        "brief_range"
    }

    fn extract(&self, input: &str) -> DateNormalizationResult {
        Self::parse(input.trim())
            .map(|date| DateNormalizationResult::matched(MatchId::BriefDateRange, date))
            .unwrap_or_else(DateNormalizationResult::no_match)
    }
}
