//! Canonical EDTF rendering and its structural inverse
//!
//! [`serialize`] is total: every [`AbstractEdtfDate`] has exactly one canonical
//! string. [`parse_canonical`] reads that grammar back (plus the empty wire
//! form of an unknown interval side) and is used to self-check extractor output.

use std::fmt;

use crate::{
    AbstractEdtfDate, DatePart, InstantEdtfDate, IntervalEdtfDate, Qualification, Year,
    MAX_SHORT_YEAR, MAX_YEAR_MAGNITUDE,
};

/// Marker rendered for open and unknown interval sides
pub const OPEN_MARKER: &str = "..";

/// Separator between interval sides
pub const INTERVAL_SEPARATOR: char = '/';

impl fmt::Display for DatePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatePart::Known(value) => write!(f, "{:02}", value),
            DatePart::Unspecified => f.write_str("XX"),
        }
    }
}

impl fmt::Display for InstantEdtfDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_known() {
            return f.write_str(OPEN_MARKER);
        }
        write!(f, "{}", self.year())?;
        if let Some(month) = self.month() {
            write!(f, "-{}", month)?;
            if let Some(day) = self.day() {
                write!(f, "-{}", day)?;
            }
        }
        f.write_str(self.qualification().suffix())
    }
}

impl fmt::Display for IntervalEdtfDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.start(), INTERVAL_SEPARATOR, self.end())
    }
}

impl fmt::Display for AbstractEdtfDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbstractEdtfDate::Instant(instant) => instant.fmt(f),
            AbstractEdtfDate::Interval(interval) => interval.fmt(f),
        }
    }
}

/// Render a date to its canonical EDTF string
///
/// # Examples
///
/// ```
/// use tempora_domain::{serialize, AbstractEdtfDate, InstantEdtfDate, IntervalEdtfDate, Year};
///
/// let interval = IntervalEdtfDate::new(
///     InstantEdtfDate::open(),
///     InstantEdtfDate::from_year(Year::new(1989)),
/// ).unwrap();
/// assert_eq!(serialize(&AbstractEdtfDate::from(interval)), "../1989");
/// ```
pub fn serialize(date: &AbstractEdtfDate) -> String {
    date.to_string()
}

/// Parse a canonical EDTF string back into a date
///
/// Returns `None` for anything outside the canonical grammar.
pub fn parse_canonical(input: &str) -> Option<AbstractEdtfDate> {
    match input.split_once(INTERVAL_SEPARATOR) {
        None => parse_known_instant(input).map(AbstractEdtfDate::from),
        Some((start, end)) => {
            if end.contains(INTERVAL_SEPARATOR) {
                return None;
            }
            let interval = IntervalEdtfDate::new(parse_side(start)?, parse_side(end)?)?;
            Some(AbstractEdtfDate::from(interval))
        }
    }
}

fn parse_side(side: &str) -> Option<InstantEdtfDate> {
    match side {
        "" => Some(InstantEdtfDate::unknown()),
        OPEN_MARKER => Some(InstantEdtfDate::open()),
        _ => parse_known_instant(side),
    }
}

fn parse_known_instant(input: &str) -> Option<InstantEdtfDate> {
    let (body, qualification) = match input.chars().last().and_then(Qualification::from_suffix) {
        Some(qualification) => (&input[..input.len() - 1], qualification),
        None => (input, Qualification::None),
    };

    let instant = if let Some(long) = body.strip_prefix('Y') {
        InstantEdtfDate::from_year(parse_long_year(long)?)
    } else {
        parse_short_instant(body)?
    };
    Some(instant.with_qualification(qualification))
}

fn parse_long_year(input: &str) -> Option<Year> {
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };
    if !(5..=9).contains(&digits.len())
        || digits.starts_with('0')
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let magnitude: i64 = digits.parse().ok()?;
    if magnitude <= MAX_SHORT_YEAR || magnitude > MAX_YEAR_MAGNITUDE {
        return None;
    }
    Some(Year::new(if negative { -magnitude } else { magnitude }))
}

fn parse_short_instant(input: &str) -> Option<InstantEdtfDate> {
    let (negative, rest) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };
    let year = parse_short_year(rest.get(..4)?, negative)?;
    let rest = &rest[4..];
    if rest.is_empty() {
        return Some(InstantEdtfDate::from_year(year));
    }

    let rest = rest.strip_prefix('-')?;
    let month = parse_part(rest.get(..2)?)?;
    let rest = &rest[2..];
    if rest.is_empty() {
        return Some(InstantEdtfDate::from_year_month(year, month));
    }

    let day = parse_part(rest.strip_prefix('-')?)?;
    Some(InstantEdtfDate::from_ymd(year, month, day))
}

fn parse_short_year(input: &str, negative: bool) -> Option<Year> {
    let known = input.trim_end_matches('X');
    let unknown = input.len() - known.len();
    if known.is_empty() || unknown > 3 || !known.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value = known.parse::<i64>().ok()? * 10_i64.pow(unknown as u32);
    let value = if negative { -value } else { value };
    Year::with_unspecified_digits(value, unknown as u8)
}

fn parse_part(input: &str) -> Option<DatePart> {
    if input == "XX" {
        return Some(DatePart::Unspecified);
    }
    if input.len() != 2 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    input.parse().ok().map(DatePart::Known)
}
