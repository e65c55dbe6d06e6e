//! Decades: `180x`, `180u?`

use std::sync::LazyLock;

use regex::Regex;
use tempora_domain::{DateExtractor, DateNormalizationResult, InstantEdtfDate, MatchId, Year};

use crate::parsing::{digits::parse_number, uncertain_if};

static DECADE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<lq>\?)?(?P<decade>[0-9]{3})[xXuU](?P<rq>\?)?$")
        .expect("Invalid decade regex")
});

/// Three digits followed by one unknown-digit marker
///
/// `180?` is not a decade: a lone `?` is an uncertainty marker, not a digit.
pub struct DecadeExtractor;

impl DecadeExtractor {
    fn parse(input: &str) -> Option<InstantEdtfDate> {
        let caps = DECADE.captures(input)?;
        let year = Year::with_unspecified_digits(parse_number(&caps["decade"])? * 10, 1)?;
        let marked = caps.name("lq").is_some() || caps.name("rq").is_some();
        Some(InstantEdtfDate::from_year(year).with_qualification(uncertain_if(marked)))
    }
}

impl DateExtractor for DecadeExtractor {
    fn name(&self) -> &'static str {
        "decade"
    }

    fn extract(&self, input: &str) -> DateNormalizationResult {
        Self::parse(input.trim())
            .map(|date| DateNormalizationResult::matched(MatchId::Decade, date))
            .unwrap_or_else(DateNormalizationResult::no_match)
    }
}
