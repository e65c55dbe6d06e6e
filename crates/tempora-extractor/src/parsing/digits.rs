//! Digit and placeholder tokens of the numeric grammars
//!
//! The numeric grammars write an unknown digit as `X`, `U`, `-` or `?`
//! depending on the source convention. Every spelling collapses here into the
//! single notion of an unspecified digit, kept apart from the `?` that marks a
//! whole date as uncertain.

use tempora_domain::{DatePart, Year};

/// Whether `c` is one of the unknown-digit placeholders
pub(crate) fn is_placeholder(c: char) -> bool {
    matches!(c, 'X' | 'x' | 'U' | 'u' | '-' | '?')
}

/// Placeholders of a single spelling (`XX`, `uU`, `--`), never mixed
fn is_uniform_placeholder(text: &str) -> bool {
    let mut chars = text.chars().map(|c| c.to_ascii_uppercase());
    match chars.next() {
        Some(first) if is_placeholder(first) => chars.all(|c| c == first),
        _ => false,
    }
}

/// Parse an ASCII-digit string
pub(crate) fn parse_number(text: &str) -> Option<i64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Parse a year token: 3-4 digits, or digits followed by trailing placeholders
///
/// Returns the year and whether any digit was unknown. The placeholders must
/// form a uniform suffix of one or two characters and the token must be four
/// characters long when it carries any.
pub(crate) fn parse_year_token(token: &str) -> Option<(Year, bool)> {
    let digits: String = token.chars().take_while(|c| c.is_ascii_digit()).collect();
    let placeholders = &token[digits.len()..];
    if placeholders.is_empty() {
        if !(3..=4).contains(&digits.len()) {
            return None;
        }
        return Some((Year::new(parse_number(&digits)?), false));
    }

    let unknown = placeholders.chars().count();
    if digits.len() + unknown != 4 || !(1..=2).contains(&unknown) {
        return None;
    }
    if !is_uniform_placeholder(placeholders) {
        return None;
    }
    let scale = 10_i64.pow(unknown as u32);
    let value = parse_number(&digits)? * scale;
    let year = Year::with_unspecified_digits(value, unknown as u8)?;
    Some((year, true))
}

/// Parse a month or day token
///
/// `Some(Some(part))` for a field, `Some(None)` for a zero field (treated as
/// absent), `None` when the token is not a field at all.
pub(crate) fn parse_field_token(token: &str) -> Option<Option<DatePart>> {
    if token.chars().any(is_placeholder) {
        return (token.len() == 2 && is_uniform_placeholder(token))
            .then_some(Some(DatePart::Unspecified));
    }
    if !(1..=2).contains(&token.len()) {
        return None;
    }
    let value = u8::try_from(parse_number(token)?).ok()?;
    Some((value != 0).then_some(DatePart::Known(value)))
}
