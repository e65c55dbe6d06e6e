//! Instant module - a single, possibly partial, point on the calendar

use crate::Year;

/// A month or day field that is part of the date's granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePart {
    /// Field value as written (not calendar-validated)
    Known(u8),

    /// Field exists but its value was not stated
    Unspecified,
}

impl DatePart {
    /// The known value, if any
    pub fn value(&self) -> Option<u8> {
        match self {
            DatePart::Known(value) => Some(*value),
            DatePart::Unspecified => None,
        }
    }
}

/// Uncertainty / approximation marker applying to a whole instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Qualification {
    /// No marker
    #[default]
    None,

    /// `?`
    Uncertain,

    /// `~`
    Approximate,

    /// `%`
    UncertainApproximate,
}

impl Qualification {
    /// Canonical suffix
    pub fn suffix(&self) -> &'static str {
        match self {
            Qualification::None => "",
            Qualification::Uncertain => "?",
            Qualification::Approximate => "~",
            Qualification::UncertainApproximate => "%",
        }
    }

    /// Parse a suffix character
    pub fn from_suffix(c: char) -> Option<Self> {
        match c {
            '?' => Some(Qualification::Uncertain),
            '~' => Some(Qualification::Approximate),
            '%' => Some(Qualification::UncertainApproximate),
            _ => None,
        }
    }

    /// Whether the instant is marked uncertain
    pub fn is_uncertain(&self) -> bool {
        matches!(
            self,
            Qualification::Uncertain | Qualification::UncertainApproximate
        )
    }

    /// Whether the instant is marked approximate
    pub fn is_approximate(&self) -> bool {
        matches!(
            self,
            Qualification::Approximate | Qualification::UncertainApproximate
        )
    }

    /// Same qualification with the approximate flag added
    pub fn with_approximate(self) -> Self {
        if self.is_uncertain() {
            Qualification::UncertainApproximate
        } else {
            Qualification::Approximate
        }
    }

    /// Same qualification with the uncertain flag added
    pub fn with_uncertain(self) -> Self {
        if self.is_approximate() {
            Qualification::UncertainApproximate
        } else {
            Qualification::Uncertain
        }
    }
}

/// What kind of bound an instant represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgeType {
    /// Carries an actual date
    #[default]
    Known,

    /// Extends without bound (`..`)
    Open,

    /// Bound exists but is not stated (empty on the wire)
    Unknown,
}

/// A single point on the calendar with independently optional precision
///
/// A day is only present when a month is. Instants whose edge type is not
/// [`EdgeType::Known`] carry zeroed fields that are never rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstantEdtfDate {
    year: Year,
    month: Option<DatePart>,
    day: Option<DatePart>,
    qualification: Qualification,
    edge: EdgeType,
}

impl InstantEdtfDate {
    /// Year-precision instant
    pub fn from_year(year: Year) -> Self {
        Self {
            year,
            month: None,
            day: None,
            qualification: Qualification::None,
            edge: EdgeType::Known,
        }
    }

    /// Year-month instant
    pub fn from_year_month(year: Year, month: DatePart) -> Self {
        Self {
            month: Some(month),
            ..Self::from_year(year)
        }
    }

    /// Complete instant
    pub fn from_ymd(year: Year, month: DatePart, day: DatePart) -> Self {
        Self {
            month: Some(month),
            day: Some(day),
            ..Self::from_year(year)
        }
    }

    /// Open edge (`..`)
    pub fn open() -> Self {
        Self {
            edge: EdgeType::Open,
            ..Self::from_year(Year::new(0))
        }
    }

    /// Unknown edge
    pub fn unknown() -> Self {
        Self {
            edge: EdgeType::Unknown,
            ..Self::from_year(Year::new(0))
        }
    }

    /// Same instant with a different qualification
    ///
    /// Edge instants have no qualification and are returned unchanged.
    pub fn with_qualification(mut self, qualification: Qualification) -> Self {
        if self.is_known() {
            self.qualification = qualification;
        }
        self
    }

    /// Same instant with day and month exchanged
    ///
    /// Only applies when both are known; otherwise the instant is unchanged.
    pub fn with_day_and_month_swapped(mut self) -> Self {
        if let (Some(DatePart::Known(_)), Some(DatePart::Known(_))) = (self.month, self.day) {
            std::mem::swap(&mut self.month, &mut self.day);
        }
        self
    }

    /// Year
    pub fn year(&self) -> Year {
        self.year
    }

    /// Month, if part of the granularity
    pub fn month(&self) -> Option<DatePart> {
        self.month
    }

    /// Day, if part of the granularity
    pub fn day(&self) -> Option<DatePart> {
        self.day
    }

    /// Qualification
    pub fn qualification(&self) -> Qualification {
        self.qualification
    }

    /// Edge type
    pub fn edge(&self) -> EdgeType {
        self.edge
    }

    /// Whether this instant carries a date
    pub fn is_known(&self) -> bool {
        self.edge == EdgeType::Known
    }

    /// Whether this instant is known down to a known day
    pub fn is_complete(&self) -> bool {
        self.is_known()
            && self.year.is_fully_known()
            && matches!(self.month, Some(DatePart::Known(_)))
            && matches!(self.day, Some(DatePart::Known(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_ignore_qualification() {
        let open = InstantEdtfDate::open().with_qualification(Qualification::Uncertain);
        assert_eq!(open.qualification(), Qualification::None);
        assert_eq!(open, InstantEdtfDate::open());
    }

    #[test]
    fn test_day_month_swap() {
        let date = InstantEdtfDate::from_ymd(Year::new(1941), DatePart::Known(22), DatePart::Known(6));
        let swapped = date.with_day_and_month_swapped();
        assert_eq!(swapped.month(), Some(DatePart::Known(6)));
        assert_eq!(swapped.day(), Some(DatePart::Known(22)));
    }

    #[test]
    fn test_swap_needs_both_parts() {
        let date = InstantEdtfDate::from_year_month(Year::new(1941), DatePart::Known(22));
        assert_eq!(date.clone().with_day_and_month_swapped(), date);
    }

    #[test]
    fn test_completeness() {
        let year = Year::new(1989);
        assert!(InstantEdtfDate::from_ymd(year, DatePart::Known(1), DatePart::Known(1)).is_complete());
        assert!(!InstantEdtfDate::from_year_month(year, DatePart::Known(1)).is_complete());
        assert!(!InstantEdtfDate::from_ymd(year, DatePart::Known(1), DatePart::Unspecified).is_complete());
        assert!(!InstantEdtfDate::open().is_complete());
    }

    #[test]
    fn test_qualification_flags() {
        assert!(Qualification::UncertainApproximate.is_uncertain());
        assert!(Qualification::UncertainApproximate.is_approximate());
        assert!(!Qualification::Approximate.is_uncertain());
        assert_eq!(Qualification::from_suffix('%'), Some(Qualification::UncertainApproximate));
        assert_eq!(Qualification::from_suffix('!'), None);
    }

    #[test]
    fn test_qualification_combination() {
        assert_eq!(Qualification::None.with_approximate(), Qualification::Approximate);
        assert_eq!(Qualification::Uncertain.with_approximate(), Qualification::UncertainApproximate);
        assert_eq!(Qualification::Approximate.with_uncertain(), Qualification::UncertainApproximate);
        assert_eq!(Qualification::Uncertain.with_uncertain(), Qualification::Uncertain);
    }
}
