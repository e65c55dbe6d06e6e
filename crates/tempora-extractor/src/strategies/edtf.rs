//! Native EDTF input (levels 0 and 1)

use std::sync::LazyLock;

use regex::Regex;
use tempora_domain::{
    AbstractEdtfDate, DateExtractor, DateNormalizationResult, DatePart, InstantEdtfDate,
    IntervalEdtfDate, MatchId, Qualification, Year, MAX_SHORT_YEAR,
};
use tempora_validator::{ValidationConfig, Validator};
use tracing::trace;

use crate::parsing::digits::parse_number;

static EDTF_INSTANT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:Y(?P<long>-?[0-9]{5,9})",
        r"|(?P<year>-?[0-9]{4})(?:-(?P<month>[0-9]{2})(?:-(?P<day>[0-9]{2})",
        r"(?P<time>T(?:[0-9]{1,2}(?::[0-9]{1,2}(?::[0-9]{1,2}(?:\.[0-9]+)?)?)?)?",
        r"(?:Z|[+-][0-9]{2}(?::[0-9]{2})?)?)?)?)?)",
        r"(?P<qualifier>[?~%])?$",
    ))
    .expect("Invalid EDTF instant regex")
});

/// Parse one known EDTF instant
///
/// A time of day is only allowed after a full date, cannot be combined with a
/// qualifier and is dropped.
fn parse_instant(text: &str) -> Option<InstantEdtfDate> {
    let caps = EDTF_INSTANT.captures(text)?;
    if caps.name("time").is_some() && caps.name("qualifier").is_some() {
        return None;
    }

    let instant = if let Some(long) = caps.name("long") {
        let value: i64 = long.as_str().parse().ok()?;
        if value.abs() <= MAX_SHORT_YEAR {
            return None;
        }
        InstantEdtfDate::from_year(Year::new(value))
    } else {
        let year_text = caps.name("year")?.as_str();
        let year = match year_text.strip_prefix('-') {
            Some(digits) => -parse_number(digits)?,
            None => parse_number(year_text)?,
        };
        let year = Year::new(year);
        let part = |name: &str| -> Option<DatePart> {
            let value = parse_number(caps.name(name)?.as_str())?;
            Some(DatePart::Known(u8::try_from(value).ok()?))
        };
        match (part("month"), part("day")) {
            (Some(month), Some(day)) => InstantEdtfDate::from_ymd(year, month, day),
            (Some(month), None) => InstantEdtfDate::from_year_month(year, month),
            _ => InstantEdtfDate::from_year(year),
        }
    };

    let qualification = caps
        .name("qualifier")
        .and_then(|q| q.as_str().chars().next())
        .and_then(Qualification::from_suffix)
        .unwrap_or_default();
    Some(instant.with_qualification(qualification))
}

/// One interval side: `..` is open, an empty side is unknown and read as open
fn parse_side(text: &str) -> Option<InstantEdtfDate> {
    match text {
        "" | ".." => Some(InstantEdtfDate::open()),
        _ => parse_instant(text),
    }
}

fn parse_interval(text: &str) -> Option<IntervalEdtfDate> {
    let (start, end) = text.split_once('/')?;
    if end.contains('/') {
        return None;
    }
    IntervalEdtfDate::new(parse_side(start)?, parse_side(end)?)
}

/// Strict calendar check against today
fn checked(date: AbstractEdtfDate) -> Option<AbstractEdtfDate> {
    let validator = Validator::new(ValidationConfig::strict());
    let result = validator.validate(&date);
    if result.is_valid() {
        Some(date)
    } else {
        trace!("EDTF candidate {} failed validation: {:?}", date, result.reasons);
        None
    }
}

fn matched(date: Option<AbstractEdtfDate>) -> DateNormalizationResult {
    date.and_then(checked)
        .map(|date| DateNormalizationResult::matched(MatchId::Edtf, date))
        .unwrap_or_else(DateNormalizationResult::no_match)
}

/// Input that is already valid EDTF: an instant or a `/` interval without spaces
pub struct EdtfExtractor;

impl DateExtractor for EdtfExtractor {
    fn name(&self) -> &'static str {
        "edtf"
    }

    fn extract(&self, input: &str) -> DateNormalizationResult {
        let input = input.trim();
        if input.chars().any(char::is_whitespace) {
            return DateNormalizationResult::no_match();
        }
        let date = if input.contains('/') {
            parse_interval(input).map(AbstractEdtfDate::from)
        } else {
            parse_instant(input).map(AbstractEdtfDate::from)
        };
        matched(date)
    }
}

/// Two known EDTF instants around a slash padded with spaces: `1918 / 1919`
pub struct EdtfRangeExtractor;

impl DateExtractor for EdtfRangeExtractor {
    fn name(&self) -> &'static str {
        "edtf_range"
    }

    fn extract(&self, input: &str) -> DateNormalizationResult {
        let date = input.trim().split_once('/').and_then(|(start, end)| {
            if end.contains('/') {
                return None;
            }
            IntervalEdtfDate::new(parse_instant(start.trim())?, parse_instant(end.trim())?)
        });
        matched(date.map(AbstractEdtfDate::from))
    }
}
