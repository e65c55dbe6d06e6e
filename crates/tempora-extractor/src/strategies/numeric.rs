//! Numeric dates: `21.1.1921`, `1937-10-??`, `20/09/18XX`, `1905 09 01`

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tempora_domain::{DateExtractor, DateNormalizationResult, DatePart, InstantEdtfDate, MatchId};

use crate::parsing::{
    digits::{parse_field_token, parse_year_token},
    uncertain_if,
};

/// Delimiters allowed inside a single numeric date
pub(crate) const ALL_DELIMITERS: &[char] = &['-', '.', '/'];

const PLAIN_YEAR: &str = r"[0-9]{3,4}";
const PLAIN_FIELD: &str = r"[0-9]{1,2}";

/// Year token of the unknown-digit grammar, `--` spelling included or not
fn unknown_year(allow_dashes: bool) -> String {
    let dashes = if allow_dashes { "|--" } else { "" };
    format!(r"[0-9]{{2}}(?:XX|UU{dashes}|\?\?)|[0-9]{{3}}[XU]|[0-9]{{3,4}}")
}

fn unknown_field(allow_dashes: bool) -> String {
    let dashes = if allow_dashes { "|--" } else { "" };
    format!(r"[0-9]{{2}}|XX|UU{dashes}|\?\?")
}

/// `Y`, `Y-M`, `Y-M-D`, `M-Y` or `D-M-Y` around one delimiter, with optional `?` marks
fn delimited_pattern(delimiter: char, year: &str, field: &str) -> String {
    let d = regex::escape(&delimiter.to_string());
    format!(
        concat!(
            r"(?i)^(?P<lq>\?)?(?:",
            r"(?P<y1>{year}){d}(?P<m1>{field})(?:{d}(?P<d1>{field}))?",
            r"|(?:(?P<d2>{field}){d})?(?P<m2>{field}){d}(?P<y2>{year})",
            r")(?P<rq>\?)?$",
        ),
        year = year,
        field = field,
        d = d,
    )
}

fn year_only_pattern(year: &str) -> String {
    format!(r"(?i)^(?P<lq>\?)?(?P<y1>{year})(?P<rq>\?)?$")
}

/// Compiled plain and unknown-digit patterns for one delimiter
struct DelimitedGrammar {
    delimiter: char,
    plain: Regex,
    unknown: Regex,
}

static YEAR_ONLY_PLAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&year_only_pattern(PLAIN_YEAR)).expect("Invalid numeric year regex")
});

static YEAR_ONLY_UNKNOWN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&year_only_pattern(&unknown_year(true)))
        .expect("Invalid unknown-digit year regex")
});

static DELIMITED: LazyLock<Vec<DelimitedGrammar>> = LazyLock::new(|| {
    ALL_DELIMITERS
        .iter()
        .map(|&delimiter| {
            let dashes = delimiter != '-';
            DelimitedGrammar {
                delimiter,
                plain: Regex::new(&delimited_pattern(delimiter, PLAIN_YEAR, PLAIN_FIELD))
                    .expect("Invalid numeric date regex"),
                unknown: Regex::new(&delimited_pattern(
                    delimiter,
                    &unknown_year(dashes),
                    &unknown_field(dashes),
                ))
                .expect("Invalid unknown-digit date regex"),
            }
        })
        .collect()
});

static SPACES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:(?P<y1>[0-9]{4}) (?P<m1>[0-9]{1,2}) (?P<d1>[0-9]{1,2})",
        r"|(?P<d2>[0-9]{1,2}) (?P<m2>[0-9]{1,2}) (?P<y2>[0-9]{4}))$",
    ))
    .expect("Invalid spaced date regex")
});

/// A numeric instant and whether any of its digits or fields were unknown
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NumericInstant {
    pub instant: InstantEdtfDate,
    pub has_unknown: bool,
}

fn first<'t>(caps: &Captures<'t>, names: [&str; 2]) -> Option<regex::Match<'t>> {
    names.iter().find_map(|name| caps.name(name))
}

/// Build the instant from captured tokens
///
/// An unknown or zero month drops month and day; an unknown or zero day
/// drops the day.
fn assemble(caps: &Captures<'_>) -> Option<NumericInstant> {
    let whole = caps.get(0)?;
    let year_match = first(caps, ["y1", "y2"])?;
    let year_token = year_match.as_str();
    // A three-digit year directly followed by `?` is rejected (`198?`)
    let followed_by_mark = whole.as_str()[year_match.end() - whole.start()..].starts_with('?');
    if year_token.len() == 3 && year_token.bytes().all(|b| b.is_ascii_digit()) && followed_by_mark {
        return None;
    }
    let (year, mut has_unknown) = parse_year_token(year_token)?;

    let month = match first(caps, ["m1", "m2"]) {
        Some(token) => parse_field_token(token.as_str())?,
        None => None,
    };
    let day = match first(caps, ["d1", "d2"]) {
        Some(token) => parse_field_token(token.as_str())?,
        None => None,
    };
    has_unknown |= month == Some(DatePart::Unspecified) || day == Some(DatePart::Unspecified);

    let instant = match (month, day) {
        (Some(month @ DatePart::Known(_)), Some(day @ DatePart::Known(_))) => {
            InstantEdtfDate::from_ymd(year, month, day)
        }
        (Some(month @ DatePart::Known(_)), _) => InstantEdtfDate::from_year_month(year, month),
        _ => InstantEdtfDate::from_year(year),
    };

    let marked = caps.name("lq").is_some() || caps.name("rq").is_some();
    Some(NumericInstant {
        instant: instant.with_qualification(uncertain_if(marked)),
        has_unknown,
    })
}

/// Parse one numeric instant whose delimiter is one of `delimiters`
///
/// The plain grammar wins over the unknown-digit grammar; the latter only
/// matches when at least one token is actually unknown. The same delimiter
/// must be used throughout.
pub(crate) fn parse_numeric_instant(input: &str, delimiters: &[char]) -> Option<NumericInstant> {
    let grammars: Vec<&DelimitedGrammar> = DELIMITED
        .iter()
        .filter(|g| delimiters.contains(&g.delimiter))
        .collect();

    let plain = std::iter::once(&*YEAR_ONLY_PLAIN).chain(grammars.iter().map(|g| &g.plain));
    for regex in plain {
        if let Some(caps) = regex.captures(input) {
            return assemble(&caps).filter(|parsed| !parsed.has_unknown);
        }
    }

    let unknown = std::iter::once(&*YEAR_ONLY_UNKNOWN).chain(grammars.iter().map(|g| &g.unknown));
    for regex in unknown {
        if let Some(caps) = regex.captures(input) {
            return assemble(&caps).filter(|parsed| parsed.has_unknown);
        }
    }
    None
}

fn parse_spaced(input: &str) -> Option<InstantEdtfDate> {
    let caps = SPACES.captures(input)?;
    assemble(&caps).map(|parsed| parsed.instant)
}

/// A single numeric date in any of the plain, unknown-digit or spaced grammars
///
/// Months and days are not checked against the calendar.
pub struct NumericPartsExtractor;

impl DateExtractor for NumericPartsExtractor {
    fn name(&self) -> &'static str {
        "numeric_parts"
    }

    fn extract(&self, input: &str) -> DateNormalizationResult {
        let input = input.trim();
        if let Some(parsed) = parse_numeric_instant(input, ALL_DELIMITERS) {
            let match_id = if parsed.has_unknown {
                MatchId::NumericAllVariantsXx
            } else {
                MatchId::NumericAllVariants
            };
            return DateNormalizationResult::matched(match_id, parsed.instant);
        }
        parse_spaced(input)
            .map(|date| DateNormalizationResult::matched(MatchId::NumericSpacesVariant, date))
            .unwrap_or_else(DateNormalizationResult::no_match)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(input: &str) -> Option<String> {
        NumericPartsExtractor.extract(input).edtf()
    }

    fn match_id(input: &str) -> MatchId {
        NumericPartsExtractor.extract(input).match_id()
    }

    #[test]
    fn test_plain_orders_and_delimiters() {
        for (input, expected) in [
            ("1989", "1989"),
            ("989", "0989"),
            ("1989-11", "1989-11"),
            ("1989.11.01", "1989-11-01"),
            ("1989/11/1", "1989-11-01"),
            ("11-1989", "1989-11"),
            ("21.1.1921", "1921-01-21"),
            ("1/11/1989", "1989-11-01"),
            ("1-1-989", "0989-01-01"),
        ] {
            assert_eq!(extract(input).as_deref(), Some(expected), "{}", input);
            assert_eq!(match_id(input), MatchId::NumericAllVariants, "{}", input);
        }
    }

    #[test]
    fn test_uncertain_marks() {
        assert_eq!(extract("?1989").as_deref(), Some("1989?"));
        assert_eq!(extract("1989-11-01?").as_deref(), Some("1989-11-01?"));
        assert_eq!(extract("?989").as_deref(), Some("0989?"));
        assert_eq!(extract("989?"), None);
        assert_eq!(extract("1-1-989?"), None);
    }

    #[test]
    fn test_calendar_values_pass_through() {
        assert_eq!(extract("1947-19-50").as_deref(), Some("1947-19-50"));
        assert_eq!(extract("32.13.1989").as_deref(), Some("1989-13-32"));
    }

    #[test]
    fn test_zero_fields_are_absent() {
        assert_eq!(extract("1989-00").as_deref(), Some("1989"));
        assert_eq!(extract("0.11.1989").as_deref(), Some("1989-11"));
    }

    #[test]
    fn test_mixed_delimiters_rejected() {
        for input in ["?989/1-1", "1989-11/01", "1989.11-01", "1989--11", "1989..11", "1989//11"] {
            assert_eq!(extract(input), None, "{}", input);
        }
    }

    #[test]
    fn test_unknown_digits() {
        for (input, expected) in [
            ("19XX", "19XX"),
            ("19xx", "19XX"),
            ("19??", "19XX"),
            ("19--", "19XX"),
            ("17--?", "17XX?"),
            ("19???", "19XX?"),
            ("198X", "198X"),
            ("198u", "198X"),
            ("???-1989", "1989?"),
            ("198X.11.XX", "198X-11"),
            ("19UU-XX-99?", "19XX?"),
            ("1937-10-??", "1937-10"),
            ("1985-10-xx", "1985-10"),
            ("20/09/18XX", "18XX-09-20"),
            ("23.02.18--", "18XX-02-23"),
            ("XX.11.1989", "1989-11"),
        ] {
            assert_eq!(extract(input).as_deref(), Some(expected), "{}", input);
            assert_eq!(match_id(input), MatchId::NumericAllVariantsXx, "{}", input);
        }
    }

    #[test]
    fn test_unknown_digit_rejections() {
        for input in [
            "1989-????",
            "1989.11.X",
            "198-",
            "198?",
            "199--09-28",
            "19---11",
            "1X--",
            "19XU",
            "19X",
            "1989-1-XX",
        ] {
            assert_eq!(extract(input), None, "{}", input);
        }
    }

    #[test]
    fn test_spaced_dates() {
        assert_eq!(extract("1905 09 01").as_deref(), Some("1905-09-01"));
        assert_eq!(extract("1 9 1905").as_deref(), Some("1905-09-01"));
        assert_eq!(extract("0 2 1980").as_deref(), Some("1980-02"));
        assert_eq!(match_id("1905 09 01"), MatchId::NumericSpacesVariant);
        assert_eq!(extract("1905 09"), None);
        assert_eq!(extract("905 09 01"), None);
        assert_eq!(extract("1905  09 01"), None);
        assert_eq!(extract("?1905 09 01"), None);
    }

    #[test]
    fn test_range_side_delimiters() {
        assert!(parse_numeric_instant("1989.11", &['.']).is_some());
        assert!(parse_numeric_instant("1989-11", &['.', '/']).is_none());
        assert!(parse_numeric_instant("1989", &[]).is_some());
    }
}
