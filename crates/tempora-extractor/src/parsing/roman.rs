//! Roman numeral conversion

const NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

fn digit_value(c: char) -> Option<u32> {
    match c.to_ascii_uppercase() {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Render a positive integer in canonical upper-case Roman notation
pub(crate) fn to_roman(mut value: u32) -> String {
    let mut out = String::new();
    for (step, numeral) in NUMERALS {
        while value >= step {
            out.push_str(numeral);
            value -= step;
        }
    }
    out
}

/// Parse a Roman numeral, case-insensitively
///
/// Only canonical spellings are accepted: `IXX` and `IIII` are rejected even
/// though a naive additive reading would give them a value.
pub(crate) fn from_roman(text: &str) -> Option<u32> {
    let values: Vec<u32> = text.chars().map(digit_value).collect::<Option<_>>()?;
    if values.is_empty() {
        return None;
    }
    let mut total = 0;
    for (i, value) in values.iter().enumerate() {
        match values.get(i + 1) {
            Some(next) if next > value => total -= *value as i64,
            _ => total += *value as i64,
        }
    }
    let total = u32::try_from(total).ok().filter(|v| *v > 0)?;
    (to_roman(total) == text.to_ascii_uppercase()).then_some(total)
}
