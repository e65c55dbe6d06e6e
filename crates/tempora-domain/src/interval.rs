//! Interval module - ranges between two instants, and the date union

use crate::InstantEdtfDate;

/// A range between two instants
///
/// At least one side is a known instant; qualifiers are independent per side.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntervalEdtfDate {
    start: InstantEdtfDate,
    end: InstantEdtfDate,
}

impl IntervalEdtfDate {
    /// Create an interval, or `None` when neither side carries a date
    pub fn new(start: InstantEdtfDate, end: InstantEdtfDate) -> Option<Self> {
        if !start.is_known() && !end.is_known() {
            return None;
        }
        Some(Self { start, end })
    }

    /// Start instant
    pub fn start(&self) -> &InstantEdtfDate {
        &self.start
    }

    /// End instant
    pub fn end(&self) -> &InstantEdtfDate {
        &self.end
    }

    /// Same interval with start and end exchanged
    pub fn swapped(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}

/// Either a single instant or an interval
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AbstractEdtfDate {
    /// Single instant
    Instant(InstantEdtfDate),

    /// Interval
    Interval(IntervalEdtfDate),
}

impl AbstractEdtfDate {
    /// Apply `f` to every instant, keeping the shape
    pub fn map_instants<F>(self, mut f: F) -> Self
    where
        F: FnMut(InstantEdtfDate) -> InstantEdtfDate,
    {
        match self {
            AbstractEdtfDate::Instant(instant) => AbstractEdtfDate::Instant(f(instant)),
            AbstractEdtfDate::Interval(interval) => AbstractEdtfDate::Interval(IntervalEdtfDate {
                start: f(interval.start),
                end: f(interval.end),
            }),
        }
    }

    /// All instants, start first
    pub fn instants(&self) -> Vec<&InstantEdtfDate> {
        match self {
            AbstractEdtfDate::Instant(instant) => vec![instant],
            AbstractEdtfDate::Interval(interval) => vec![&interval.start, &interval.end],
        }
    }

    /// Whether every known instant is precise to a known day
    pub fn is_complete(&self) -> bool {
        self.instants()
            .into_iter()
            .filter(|instant| instant.is_known())
            .all(InstantEdtfDate::is_complete)
    }
}

impl From<InstantEdtfDate> for AbstractEdtfDate {
    fn from(instant: InstantEdtfDate) -> Self {
        AbstractEdtfDate::Instant(instant)
    }
}

impl From<IntervalEdtfDate> for AbstractEdtfDate {
    fn from(interval: IntervalEdtfDate) -> Self {
        AbstractEdtfDate::Interval(interval)
    }
}
