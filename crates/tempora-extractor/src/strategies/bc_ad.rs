//! Years with an explicit era marker: `44 BC`, `1990 BC-1989 BC`

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tempora_domain::{
    DateExtractor, DateNormalizationResult, InstantEdtfDate, IntervalEdtfDate, MatchId, Year,
};

use crate::parsing::{
    digits::parse_number,
    era::{era_alternation, to_astronomical, Era},
};

/// `N ERA` with named groups suffixed by `side`
fn instant_pattern(side: &str) -> String {
    format!(
        "(?P<year{side}>[0-9]{{1,9}}) ?(?:(?P<bc{side}>{})|(?P<ad{side}>{}))",
        era_alternation(Era::Bc),
        era_alternation(Era::Ad),
    )
}

static BC_AD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i)^{}$", instant_pattern("")))
        .expect("Invalid BC/AD regex")
});

static BC_AD_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^{}\s?[-/]\s?{}$",
        instant_pattern("_start"),
        instant_pattern("_end"),
    ))
    .expect("Invalid BC/AD range regex")
});

fn instant(caps: &Captures<'_>, side: &str) -> Option<InstantEdtfDate> {
    let year = parse_number(caps.name(&format!("year{side}"))?.as_str())?;
    let era = if caps.name(&format!("bc{side}")).is_some() {
        Era::Bc
    } else {
        Era::Ad
    };
    let year = to_astronomical(year, era)?;
    Some(InstantEdtfDate::from_year(Year::new(year)))
}

/// A single year with a BC or AD marker, converted to astronomical numbering
pub struct BcAdExtractor;

impl DateExtractor for BcAdExtractor {
    fn name(&self) -> &'static str {
        "bc_ad"
    }

    fn extract(&self, input: &str) -> DateNormalizationResult {
        BC_AD
            .captures(input.trim())
            .and_then(|caps| instant(&caps, ""))
            .map(|date| DateNormalizationResult::matched(MatchId::BcAd, date))
            .unwrap_or_else(DateNormalizationResult::no_match)
    }
}

/// Two era-marked years joined by `-` or `/`; the start must precede the end
pub struct BcAdRangeExtractor;

impl BcAdRangeExtractor {
    fn parse(input: &str) -> Option<IntervalEdtfDate> {
        let caps = BC_AD_RANGE.captures(input)?;
        let start = instant(&caps, "_start")?;
        let end = instant(&caps, "_end")?;
        if start.year().value() >= end.year().value() {
            return None;
        }
        IntervalEdtfDate::new(start, end)
    }
}

impl DateExtractor for BcAdRangeExtractor {
    fn name(&self) -> &'static str {
        "bc_ad_range"
    }

    fn extract(&self, input: &str) -> DateNormalizationResult {
        Self::parse(input.trim())
            .map(|date| DateNormalizationResult::matched(MatchId::BcAd, date))
            .unwrap_or_else(DateNormalizationResult::no_match)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(input: &str) -> Option<String> {
        BcAdExtractor.extract(input).edtf()
    }

    fn range(input: &str) -> Option<String> {
        BcAdRangeExtractor.extract(input).edtf()
    }

    #[test]
    fn test_single_years() {
        assert_eq!(single("44 BC").as_deref(), Some("-0043"));
        assert_eq!(single("1 BC").as_deref(), Some("0000"));
        assert_eq!(single("1989 AD").as_deref(), Some("1989"));
        assert_eq!(single("1989AD").as_deref(), Some("1989"));
        assert_eq!(single("753 a.C.").as_deref(), Some("-0752"));
        assert_eq!(single("300 v.Chr.").as_deref(), Some("-0299"));
        assert_eq!(single("1990 bce").as_deref(), Some("-1989"));
        assert_eq!(single("12345 BC").as_deref(), Some("Y-12344"));
    }

    #[test]
    fn test_year_zero_never_accepted() {
        assert_eq!(single("0 BC"), None);
        assert_eq!(single("0 AD"), None);
        assert_eq!(range("0 BC-1 AD"), None);
    }

    #[test]
    fn test_ranges() {
        for (input, expected) in [
            ("1990 BC-1 BC", "-1989/0000"),
            ("1989 BC-1989 AD", "-1988/1989"),
            ("1990 BC-1989 BC", "-1989/-1988"),
            ("1990 π.Χ.-1989 π.Χ.", "-1989/-1988"),
            ("1989 AD/1990 AD", "1989/1990"),
            ("1989 μ.Χ./1990 μ.Χ.", "1989/1990"),
            ("1989 π.Χ.-1 μ.Χ.", "-1988/0001"),
            ("337 BC - 283 BC", "-0336/-0282"),
        ] {
            assert_eq!(range(input).as_deref(), Some(expected), "{}", input);
        }
        assert_eq!(BcAdRangeExtractor.extract("1989 AD/1990 AD").match_id(), MatchId::BcAd);
    }

    #[test]
    fn test_rejected_ranges() {
        for input in [
            "1990 BC//1989 BC",
            "-1990 BC-1989 BC",
            "1989 BC-1990 BC",
            "1989 AD-1989 AD",
            "1990 BC--1989 BC",
            "1990 BC",
            "12th century BC",
        ] {
            assert_eq!(range(input), None, "{}", input);
        }
    }
}
