//! Machine-formatted timestamps: `Sat Jan 01 01:00:00 CET 1701`

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use regex::Regex;
use tempora_domain::{
    DateExtractor, DateNormalizationResult, DatePart, InstantEdtfDate, MatchId, Year,
};

static TO_STRING_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z]{3} (?P<month>[A-Za-z]{3}) (?P<day>[0-9]{2}) ",
        r"(?P<time>[0-9]{2}:[0-9]{2}:[0-9]{2}) [A-Za-z]{2,5} (?P<year>[0-9]{4})$",
    ))
    .expect("Invalid timestamp regex")
});

static ISO_LIKE_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<datetime>[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}(?:\.[0-9]{1,3})?)",
        r"(?: [A-Za-z]{2,5})?$",
    ))
    .expect("Invalid date-time regex")
});

fn to_instant(date: NaiveDate) -> Option<InstantEdtfDate> {
    Some(InstantEdtfDate::from_ymd(
        Year::new(i64::from(date.year())),
        DatePart::Known(u8::try_from(date.month()).ok()?),
        DatePart::Known(u8::try_from(date.day()).ok()?),
    ))
}

/// `EEE MMM dd HH:mm:ss ZONE yyyy` and `yyyy-MM-dd HH:mm:ss[.fff][ ZONE]`
///
/// The time and zone are parsed for validity and then dropped.
pub struct FormattedFullDateExtractor;

impl FormattedFullDateExtractor {
    fn parse(input: &str) -> Option<InstantEdtfDate> {
        if let Some(caps) = TO_STRING_FORMAT.captures(input) {
            let text = format!("{} {} {} {}", &caps["month"], &caps["day"], &caps["time"], &caps["year"]);
            let parsed = NaiveDateTime::parse_from_str(&text, "%b %d %H:%M:%S %Y").ok()?;
            return to_instant(parsed.date());
        }

        let caps = ISO_LIKE_FORMAT.captures(input)?;
        let parsed = NaiveDateTime::parse_from_str(&caps["datetime"], "%Y-%m-%d %H:%M:%S%.f").ok()?;
        to_instant(parsed.date())
    }
}

impl DateExtractor for FormattedFullDateExtractor {
    fn name(&self) -> &'static str {
        "formatted_full_date"
    }

    fn extract(&self, input: &str) -> DateNormalizationResult {
        Self::parse(input.trim())
            .map(|date| DateNormalizationResult::matched(MatchId::FormattedFullDate, date))
            .unwrap_or_else(DateNormalizationResult::no_match)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(input: &str) -> Option<String> {
        FormattedFullDateExtractor.extract(input).edtf()
    }

    #[test]
    fn test_to_string_format() {
        assert_eq!(extract("Sat Jan 01 01:00:00 CET 1701").as_deref(), Some("1701-01-01"));
        assert_eq!(extract("Mon Dec 31 23:59:59 GMT 1979").as_deref(), Some("1979-12-31"));
    }

    #[test]
    fn test_iso_like_format() {
        assert_eq!(extract("2013-03-21 18:45:36 UTC").as_deref(), Some("2013-03-21"));
        assert_eq!(extract("2013-09-07 09:31:51").as_deref(), Some("2013-09-07"));
        assert_eq!(extract("2013-09-07 09:31:51.5 UTC").as_deref(), Some("2013-09-07"));
        assert_eq!(
            FormattedFullDateExtractor.extract("2013-03-21 18:45:36 UTC").match_id(),
            MatchId::FormattedFullDate
        );
    }

    #[test]
    fn test_invalid_values_rejected() {
        for input in [
            "Sat Foo 01 01:00:00 CET 1701",
            "Sat Feb 30 01:00:00 CET 1701",
            "2013-02-30 18:45:36 UTC",
            "2013-03-21 25:45:36 UTC",
            "2013-03-21T18:45:36",
            "2013-03-21",
        ] {
            assert_eq!(extract(input), None, "{}", input);
        }
    }
}
