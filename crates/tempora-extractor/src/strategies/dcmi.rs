//! DCMI Period encoding: `name=Modern era; start=1975;`

use std::sync::LazyLock;

use regex::Regex;
use tempora_domain::{
    DateExtractor, DateNormalizationResult, DatePart, InstantEdtfDate, IntervalEdtfDate, MatchId,
    Year,
};
use tracing::trace;

use crate::parsing::digits::parse_number;

static W3C_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<year>[+-]?[0-9]{1,9})(?:-(?P<month>[0-9]{1,2})(?:-(?P<day>[0-9]{1,2}))?)?",
        r"(?:T[0-9]{1,2}(?::[0-9]{1,2}(?::[0-9]{1,2}(?:\.[0-9]+)?)?)?",
        r"(?:Z|[+-][0-9]{2}(?::?[0-9]{2})?)?)?$",
    ))
    .expect("Invalid W3C-DTF regex")
});

const SCHEMES: [&str; 2] = ["W3C-DTF", "W3CDTF"];

/// The fields of a DCMI Period value, borrowed from the input
#[derive(Debug, Default)]
struct Period<'a> {
    name: Option<&'a str>,
    start: Option<&'a str>,
    end: Option<&'a str>,
    scheme: Option<&'a str>,
}

impl<'a> Period<'a> {
    fn parse(input: &'a str) -> Option<Self> {
        let mut period = Period::default();
        let components = input.split(';').map(str::trim).filter(|c| !c.is_empty());
        for (index, component) in components.enumerate() {
            let Some((key, value)) = component.split_once('=') else {
                if index > 0 {
                    return None;
                }
                period.name = Some(component);
                continue;
            };
            let slot = match key.trim().to_ascii_lowercase().as_str() {
                "name" => &mut period.name,
                "start" => &mut period.start,
                "end" => &mut period.end,
                "scheme" => &mut period.scheme,
                _ => return None,
            };
            if slot.is_some() {
                return None;
            }
            *slot = Some(value.trim());
        }
        Some(period)
    }
}

/// Parse a W3C-DTF value; the time of day is dropped
///
/// A zero month or day counts as absent, and a day without a month is ignored.
fn parse_w3c_date(value: &str) -> Option<InstantEdtfDate> {
    let caps = W3C_DATE.captures(value)?;
    let year_text = caps["year"].trim_start_matches('+');
    let year = match year_text.strip_prefix('-') {
        Some(digits) => -parse_number(digits)?,
        None => parse_number(year_text)?,
    };
    let year = Year::new(year);
    let part = |name: &str| -> Option<DatePart> {
        let value = parse_number(caps.name(name)?.as_str()).filter(|&v| v != 0)?;
        Some(DatePart::Known(u8::try_from(value).ok()?))
    };
    Some(match (part("month"), part("day")) {
        (Some(month), Some(day)) => InstantEdtfDate::from_ymd(year, month, day),
        (Some(month), None) => InstantEdtfDate::from_year_month(year, month),
        _ => InstantEdtfDate::from_year(year),
    })
}

/// An empty value counts as absent; a present one must parse
fn parse_edge(value: Option<&str>) -> Option<Option<InstantEdtfDate>> {
    match value.filter(|v| !v.is_empty()) {
        None => Some(None),
        Some(value) => parse_w3c_date(value).map(Some),
    }
}

/// `;`-separated `key=value` components describing a named period
///
/// A missing start or end becomes an open edge; the name is reported as the
/// result label.
pub struct DcmiPeriodExtractor;

impl DcmiPeriodExtractor {
    fn parse(input: &str) -> Option<(IntervalEdtfDate, Option<String>)> {
        let period = Period::parse(input)?;
        if let Some(scheme) = period.scheme {
            if !SCHEMES.iter().any(|s| s.eq_ignore_ascii_case(scheme)) {
                trace!("Unsupported DCMI scheme: {}", scheme);
                return None;
            }
        }

        let start = parse_edge(period.start)?;
        let end = parse_edge(period.end)?;
        if start.is_none() && end.is_none() {
            return None;
        }
        let interval = IntervalEdtfDate::new(
            start.unwrap_or_else(InstantEdtfDate::open),
            end.unwrap_or_else(InstantEdtfDate::open),
        )?;
        let label = period.name.filter(|n| !n.is_empty()).map(str::to_string);
        Some((interval, label))
    }
}

impl DateExtractor for DcmiPeriodExtractor {
    fn name(&self) -> &'static str {
        "dcmi_period"
    }

    fn extract(&self, input: &str) -> DateNormalizationResult {
        match Self::parse(input.trim()) {
            Some((interval, label)) => {
                let result = DateNormalizationResult::matched(MatchId::DcmiPeriod, interval);
                match label {
                    Some(label) => result.with_label(label),
                    None => result,
                }
            }
            None => DateNormalizationResult::no_match(),
        }
    }
}
