//! Parsing utilities shared by the extraction strategies
//!
//! Everything here is pure: token recognizers, the Roman numeral codec, and
//! the static era and month-name tables.

pub(crate) mod digits;
pub(crate) mod era;
pub(crate) mod months;
pub(crate) mod roman;

use tempora_domain::Qualification;

/// Qualification for a grammar whose only marker is a leading or trailing `?`
pub(crate) fn uncertain_if(marked: bool) -> Qualification {
    if marked {
        Qualification::Uncertain
    } else {
        Qualification::None
    }
}

/// Escape a literal for use inside a regex alternation
pub(crate) fn alternation<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
    let mut words: Vec<&str> = words.into_iter().collect();
    // Longest first so that `B.C.` wins over `BC` and `sept` over `sep`
    words.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
    words.dedup();
    words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternation_orders_longest_first() {
        assert_eq!(alternation(["BC", "B.C.", "BCE"]), r"B\.C\.|BCE|BC");
    }

    #[test]
    fn test_alternation_deduplicates() {
        assert_eq!(alternation(["mar", "mar", "march"]), "march|mar");
    }

    #[test]
    fn test_uncertain_if() {
        assert_eq!(uncertain_if(true), Qualification::Uncertain);
        assert_eq!(uncertain_if(false), Qualification::None);
    }
}
