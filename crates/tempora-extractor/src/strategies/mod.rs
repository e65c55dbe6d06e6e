//! Extraction strategies
//!
//! Each grammar is a stateless unit struct implementing [`DateExtractor`].
//! The pipeline never registers strategies dynamically: precedence between
//! overlapping grammars is fixed by [`DATE_PROPERTY_ORDER`] and
//! [`GENERIC_PROPERTY_ORDER`].

mod bc_ad;
mod brief_range;
mod century;
mod dcmi;
mod decade;
mod edtf;
mod formatted;
mod long_year;
mod month_name;
mod numeric;
mod numeric_range;

pub use bc_ad::{BcAdExtractor, BcAdRangeExtractor};
pub use brief_range::BriefRangeExtractor;
pub use century::{CenturyNumericExtractor, CenturyRomanExtractor, CenturyRomanRangeExtractor};
pub use dcmi::DcmiPeriodExtractor;
pub use decade::DecadeExtractor;
pub use edtf::{EdtfExtractor, EdtfRangeExtractor};
pub use formatted::FormattedFullDateExtractor;
pub use long_year::{LongNegativeYearExtractor, LongNegativeYearRangeExtractor};
pub use month_name::MonthNameExtractor;
pub use numeric::NumericPartsExtractor;
pub use numeric_range::NumericPartsRangeExtractor;

use tempora_domain::{DateExtractor, DateNormalizationResult};

/// Every grammar the pipeline knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// `2014/15`
    BriefRange,
    /// Native EDTF levels 0 and 1
    Edtf,
    /// Two EDTF instants around a spaced slash
    EdtfRange,
    /// `18..`, `19th century`
    CenturyNumeric,
    /// `XIV`, `s. XVI`
    CenturyRoman,
    /// `S. XVI-XVIII`
    CenturyRomanRange,
    /// `180x`
    Decade,
    /// Two numeric dates joined by a range separator
    NumericPartsRange,
    /// A single numeric date
    NumericParts,
    /// `name=...; start=...; end=...`
    DcmiPeriod,
    /// `18 September 1914`
    MonthName,
    /// `Sat Jan 01 01:00:00 CET 1701`
    FormattedFullDate,
    /// `44 BC`
    BcAd,
    /// `1990 BC-1989 BC`
    BcAdRange,
    /// `-12345`
    LongNegativeYear,
    /// `-123456/-12345`
    LongNegativeYearRange,
}

/// Strategy order for date-valued properties
pub const DATE_PROPERTY_ORDER: [Strategy; 16] = [
    Strategy::BriefRange,
    Strategy::Edtf,
    Strategy::EdtfRange,
    Strategy::CenturyNumeric,
    Strategy::CenturyRoman,
    Strategy::CenturyRomanRange,
    Strategy::Decade,
    Strategy::NumericPartsRange,
    Strategy::NumericParts,
    Strategy::DcmiPeriod,
    Strategy::MonthName,
    Strategy::FormattedFullDate,
    Strategy::BcAd,
    Strategy::BcAdRange,
    Strategy::LongNegativeYear,
    Strategy::LongNegativeYearRange,
];

/// Strategy order for generic properties: brief ranges are too ambiguous
/// outside a date field
pub const GENERIC_PROPERTY_ORDER: [Strategy; 15] = [
    Strategy::Edtf,
    Strategy::EdtfRange,
    Strategy::CenturyNumeric,
    Strategy::CenturyRoman,
    Strategy::CenturyRomanRange,
    Strategy::Decade,
    Strategy::NumericPartsRange,
    Strategy::NumericParts,
    Strategy::DcmiPeriod,
    Strategy::MonthName,
    Strategy::FormattedFullDate,
    Strategy::BcAd,
    Strategy::BcAdRange,
    Strategy::LongNegativeYear,
    Strategy::LongNegativeYearRange,
];

impl Strategy {
    fn extractor(&self) -> &'static dyn DateExtractor {
        match self {
            Strategy::BriefRange => &BriefRangeExtractor,
            Strategy::Edtf => &EdtfExtractor,
            Strategy::EdtfRange => &EdtfRangeExtractor,
            Strategy::CenturyNumeric => &CenturyNumericExtractor,
            Strategy::CenturyRoman => &CenturyRomanExtractor,
            Strategy::CenturyRomanRange => &CenturyRomanRangeExtractor,
            Strategy::Decade => &DecadeExtractor,
            Strategy::NumericPartsRange => &NumericPartsRangeExtractor,
            Strategy::NumericParts => &NumericPartsExtractor,
            Strategy::DcmiPeriod => &DcmiPeriodExtractor,
            Strategy::MonthName => &MonthNameExtractor,
            Strategy::FormattedFullDate => &FormattedFullDateExtractor,
            Strategy::BcAd => &BcAdExtractor,
            Strategy::BcAdRange => &BcAdRangeExtractor,
            Strategy::LongNegativeYear => &LongNegativeYearExtractor,
            Strategy::LongNegativeYearRange => &LongNegativeYearRangeExtractor,
        }
    }
}

impl DateExtractor for Strategy {
    fn name(&self) -> &'static str {
        self.extractor().name()
    }

    fn extract(&self, input: &str) -> DateNormalizationResult {
        self.extractor().extract(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generic_order_is_date_order_without_brief_range() {
        let expected: Vec<Strategy> = DATE_PROPERTY_ORDER
            .iter()
            .copied()
            .filter(|s| *s != Strategy::BriefRange)
            .collect();
        assert_eq!(GENERIC_PROPERTY_ORDER.to_vec(), expected);
    }

    #[test]
    fn test_every_strategy_listed_once() {
        let unique: HashSet<Strategy> = DATE_PROPERTY_ORDER.iter().copied().collect();
        assert_eq!(unique.len(), DATE_PROPERTY_ORDER.len());
        let names: HashSet<&str> = DATE_PROPERTY_ORDER.iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), DATE_PROPERTY_ORDER.len());
    }

    #[test]
    fn test_strategies_dispatch() {
        assert_eq!(Strategy::Decade.extract("180x").edtf().as_deref(), Some("180X"));
        assert!(!Strategy::Decade.extract("1989").is_match());
    }
}
