//! Centuries: `18..`, `19th century`, `XIV`, `S. XVI-XVIII`

use std::sync::LazyLock;

use regex::Regex;
use tempora_domain::{
    DateExtractor, DateNormalizationResult, InstantEdtfDate, IntervalEdtfDate, MatchId,
    Qualification, Year,
};

use crate::parsing::{digits::parse_number, roman::from_roman, uncertain_if};

const ROMAN_CENTURY: &str = r"X?(?:IX|IV|VI{0,3}|I{1,3})|X|XXI?";
const ROMAN_PREFIX: &str = r"(?:(?:saec|sec|s)(?:\s|\.\s?))?";

static CENTURY_NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<lq>\?)?(?P<century>1[0-9]|2[01])\.\.(?P<rq>\?)?$")
        .expect("Invalid numeric century regex")
});

static CENTURY_ORDINAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?P<lq>\?)?(?P<ordinal>2?1st|2nd|3rd|(?:1[0-9]|[4-9]|20)th)\scentury(?P<rq>\?)?$",
    )
    .expect("Invalid ordinal century regex")
});

static CENTURY_ROMAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^(?P<lq>\?)?{ROMAN_PREFIX}(?P<numeral>{ROMAN_CENTURY})(?P<rq>\?)?$"
    ))
    .expect("Invalid roman century regex")
});

static CENTURY_ROMAN_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^\??{ROMAN_PREFIX}(?P<start>{ROMAN_CENTURY})\??\s?-\s?\??(?P<end>{ROMAN_CENTURY})\??$"
    ))
    .expect("Invalid roman century range regex")
});

/// The century whose first year is `(number - 1) * 100`, last two digits unknown
fn century(number: i64, qualification: Qualification) -> Option<InstantEdtfDate> {
    let year = Year::with_unspecified_digits((number - 1) * 100, 2)?;
    Some(InstantEdtfDate::from_year(year).with_qualification(qualification))
}

/// `18..` and English ordinals up to the 21st century
pub struct CenturyNumericExtractor;

impl CenturyNumericExtractor {
    fn parse(input: &str) -> Option<InstantEdtfDate> {
        if let Some(caps) = CENTURY_NUMERIC.captures(input) {
            let number = parse_number(&caps["century"])? + 1;
            let marked = caps.name("lq").is_some() || caps.name("rq").is_some();
            return century(number, uncertain_if(marked));
        }

        let caps = CENTURY_ORDINAL.captures(input)?;
        let ordinal = &caps["ordinal"];
        let number = parse_number(&ordinal[..ordinal.len() - 2])?;
        let marked = caps.name("lq").is_some() || caps.name("rq").is_some();
        century(number, uncertain_if(marked))
    }
}

impl DateExtractor for CenturyNumericExtractor {
    fn name(&self) -> &'static str {
        "century_numeric"
    }

    fn extract(&self, input: &str) -> DateNormalizationResult {
        Self::parse(input.trim())
            .map(|date| DateNormalizationResult::matched(MatchId::CenturyNumeric, date))
            .unwrap_or_else(DateNormalizationResult::no_match)
    }
}

/// A Roman numeral century (I to XXI), optionally prefixed `s.`, `sec.` or `saec.`
pub struct CenturyRomanExtractor;

impl CenturyRomanExtractor {
    fn parse(input: &str) -> Option<InstantEdtfDate> {
        let caps = CENTURY_ROMAN.captures(input)?;
        let number = from_roman(&caps["numeral"])?;
        let marked = caps.name("lq").is_some() || caps.name("rq").is_some();
        century(i64::from(number), uncertain_if(marked))
    }
}

impl DateExtractor for CenturyRomanExtractor {
    fn name(&self) -> &'static str {
        "century_roman"
    }

    fn extract(&self, input: &str) -> DateNormalizationResult {
        Self::parse(input.trim())
            .map(|date| DateNormalizationResult::matched(MatchId::CenturyRoman, date))
            .unwrap_or_else(DateNormalizationResult::no_match)
    }
}

/// Two Roman numeral centuries joined by a hyphen
///
/// A `?` anywhere makes both sides uncertain.
pub struct CenturyRomanRangeExtractor;

impl CenturyRomanRangeExtractor {
    fn parse(input: &str) -> Option<IntervalEdtfDate> {
        let caps = CENTURY_ROMAN_RANGE.captures(input)?;
        let qualification = uncertain_if(input.contains('?'));
        let start = from_roman(&caps["start"])?;
        let end = from_roman(&caps["end"])?;
        IntervalEdtfDate::new(
            century(i64::from(start), qualification)?,
            century(i64::from(end), qualification)?,
        )
    }
}

impl DateExtractor for CenturyRomanRangeExtractor {
    fn name(&self) -> &'static str {
        "century_roman_range"
    }

    fn extract(&self, input: &str) -> DateNormalizationResult {
        Self::parse(input.trim())
            .map(|date| DateNormalizationResult::matched(MatchId::CenturyRangeRoman, date))
            .unwrap_or_else(DateNormalizationResult::no_match)
    }
}
