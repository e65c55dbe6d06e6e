//! Ranges of two numeric dates: `1851-01-01 - 1851-12-31`, `1907/?`

use tempora_domain::{
    DateExtractor, DateNormalizationResult, InstantEdtfDate, IntervalEdtfDate, MatchId,
};
use tracing::trace;

use super::numeric::{parse_numeric_instant, NumericInstant};

/// One way of joining two dates, with the date delimiters and open-side
/// tokens it tolerates
struct RangeFamily {
    separator: &'static str,
    delimiters: &'static [char],
    unspecified: &'static [&'static str],
    trim_sides: bool,
}

const FAMILIES: [RangeFamily; 5] = [
    RangeFamily {
        separator: "/",
        delimiters: &['-', '.'],
        unspecified: &["?", "-", ".."],
        trim_sides: false,
    },
    RangeFamily {
        separator: " - ",
        delimiters: &['-', '.', '/'],
        unspecified: &["?", "-", ".."],
        trim_sides: true,
    },
    RangeFamily {
        separator: "|",
        delimiters: &['-', '.', '/'],
        unspecified: &["?", "-", ".."],
        trim_sides: true,
    },
    RangeFamily {
        separator: "-",
        delimiters: &['.', '/'],
        unspecified: &["?", ".."],
        trim_sides: false,
    },
    RangeFamily {
        separator: " ",
        delimiters: &['-', '.', '/'],
        unspecified: &[],
        trim_sides: false,
    },
];

/// Below this, an open end is more likely a truncated year (`187-?`)
const MIN_YEAR_BEFORE_OPEN_END: i64 = 1000;

#[derive(Debug)]
enum Side {
    Known(NumericInstant),
    Unspecified,
}

impl RangeFamily {
    fn side(&self, text: &str) -> Option<Side> {
        let text = if self.trim_sides { text.trim() } else { text };
        if self.unspecified.contains(&text) {
            return Some(Side::Unspecified);
        }
        parse_numeric_instant(text, self.delimiters).map(Side::Known)
    }

    /// Every reading of `input` split at one occurrence of the separator
    fn readings(&self, input: &str) -> Vec<(Side, Side)> {
        input
            .match_indices(self.separator)
            .filter_map(|(index, separator)| {
                let start = self.side(&input[..index])?;
                let end = self.side(&input[index + separator.len()..])?;
                Some((start, end))
            })
            .collect()
    }

    /// Two known sides are preferred over a reading with an open side
    fn parse(&self, input: &str) -> Option<(IntervalEdtfDate, bool)> {
        let readings = self.readings(input);

        for reading in &readings {
            if let (Side::Known(start), Side::Known(end)) = reading {
                let interval = IntervalEdtfDate::new(start.instant.clone(), end.instant.clone())?;
                return Some((interval, start.has_unknown || end.has_unknown));
            }
        }

        for reading in readings {
            match reading {
                (Side::Known(start), Side::Unspecified) => {
                    if start.instant.year().value() < MIN_YEAR_BEFORE_OPEN_END {
                        trace!("Open-ended range after a short year is ambiguous: {}", input);
                        continue;
                    }
                    let interval = IntervalEdtfDate::new(start.instant, InstantEdtfDate::open())?;
                    return Some((interval, start.has_unknown));
                }
                (Side::Unspecified, Side::Known(end)) => {
                    let interval = IntervalEdtfDate::new(InstantEdtfDate::open(), end.instant)?;
                    return Some((interval, end.has_unknown));
                }
                _ => continue,
            }
        }
        None
    }
}

/// Two numeric dates joined by `/`, ` - `, `|`, `-` or a space
///
/// One side may be left open with `?`, `-` or `..`, depending on the
/// separator; the space separator never allows an open side.
pub struct NumericPartsRangeExtractor;

impl DateExtractor for NumericPartsRangeExtractor {
    fn name(&self) -> &'static str {
        "numeric_parts_range"
    }

    fn extract(&self, input: &str) -> DateNormalizationResult {
        let input = input.trim();
        FAMILIES
            .iter()
            .find_map(|family| family.parse(input))
            .map(|(interval, has_unknown)| {
                let match_id = if has_unknown {
                    MatchId::NumericRangeAllVariantsXx
                } else {
                    MatchId::NumericRangeAllVariants
                };
                DateNormalizationResult::matched(match_id, interval)
            })
            .unwrap_or_else(DateNormalizationResult::no_match)
    }
}
