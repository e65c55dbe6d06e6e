//! Dates with a written month: `18 September 1914`, `Nov. 6, 1902`

use std::sync::LazyLock;

use regex::Regex;
use tempora_domain::{
    DateExtractor, DateNormalizationResult, DatePart, InstantEdtfDate, MatchId, Year,
};

use crate::parsing::{digits::parse_number, months, uncertain_if};

const SEPARATOR: &str = r"(?: |[.,] ?)";

static MONTH_NAME: LazyLock<Regex> = LazyLock::new(|| {
    let month = months::month_alternation();
    Regex::new(&format!(
        concat!(
            r"(?i)^(?P<lq>\?)?(?:",
            r"(?P<day1>[0-9]{{1,2}}){sep}(?P<month1>{month}){sep}(?P<year1>[0-9]{{4}})",
            r"|(?P<month2>{month}){sep}(?P<day2>[0-9]{{1,2}}){sep}(?P<year2>[0-9]{{4}})",
            r"|(?P<month3>{month}){sep}(?P<year3>[0-9]{{4}})",
            r")(?P<rq>\?)?$",
        ),
        sep = SEPARATOR,
        month = month,
    ))
    .expect("Invalid month name regex")
});

/// Day, month name and four-digit year in one of three orders
///
/// Month names and abbreviations are recognized in seven languages. The day
/// must lie in 1-31 but is not checked against the month.
pub struct MonthNameExtractor;

impl MonthNameExtractor {
    fn parse(input: &str) -> Option<InstantEdtfDate> {
        let caps = MONTH_NAME.captures(input)?;
        let pick = |names: [&str; 3]| names.iter().find_map(|name| caps.name(name));

        let month = months::month_number(pick(["month1", "month2", "month3"])?.as_str())?;
        let year = Year::new(parse_number(pick(["year1", "year2", "year3"])?.as_str())?);
        let instant = match pick(["day1", "day2", "day3"]) {
            Some(day) => {
                let day = u8::try_from(parse_number(day.as_str())?).ok()?;
                if !(1..=31).contains(&day) {
                    return None;
                }
                InstantEdtfDate::from_ymd(year, DatePart::Known(month), DatePart::Known(day))
            }
            None => InstantEdtfDate::from_year_month(year, DatePart::Known(month)),
        };

        let marked = caps.name("lq").is_some() || caps.name("rq").is_some();
        Some(instant.with_qualification(uncertain_if(marked)))
    }
}

impl DateExtractor for MonthNameExtractor {
    fn name(&self) -> &'static str {
        "month_name"
    }

    fn extract(&self, input: &str) -> DateNormalizationResult {
        Self::parse(input.trim())
            .map(|date| DateNormalizationResult::matched(MatchId::MonthName, date))
            .unwrap_or_else(DateNormalizationResult::no_match)
    }
}
