//! Year module - calendar years with unknown trailing digits

use std::fmt;

/// Largest year magnitude representable in EDTF (nine digits)
pub const MAX_YEAR_MAGNITUDE: i64 = 999_999_999;

/// Largest year magnitude written without the `Y` prefix
pub const MAX_SHORT_YEAR: i64 = 9_999;

/// A calendar year, possibly with unknown trailing digits
///
/// `198X` is stored as value `1980` with one unspecified digit and `19XX`
/// as `1900` with two. Unspecified digits are always zero in `value`.
/// Years beyond four digits are long years and never carry unknown digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Year {
    value: i64,
    unspecified_digits: u8,
}

impl Year {
    /// Create a fully known year
    ///
    /// # Examples
    ///
    /// ```
    /// use tempora_domain::Year;
    ///
    /// assert_eq!(Year::new(989).to_string(), "0989");
    /// assert_eq!(Year::new(-43).to_string(), "-0043");
    /// assert_eq!(Year::new(-123456).to_string(), "Y-123456");
    /// ```
    pub fn new(value: i64) -> Self {
        Self {
            value,
            unspecified_digits: 0,
        }
    }

    /// Create a year whose last `digits` digits are unknown
    ///
    /// The unknown positions of `value` are zeroed. Returns `None` for long
    /// years or when more than three digits would be unknown.
    ///
    /// # Examples
    ///
    /// ```
    /// use tempora_domain::Year;
    ///
    /// let decade = Year::with_unspecified_digits(1987, 1).unwrap();
    /// assert_eq!(decade.to_string(), "198X");
    /// ```
    pub fn with_unspecified_digits(value: i64, digits: u8) -> Option<Self> {
        if digits > 3 || value.abs() > MAX_SHORT_YEAR {
            return None;
        }
        let scale = 10_i64.pow(u32::from(digits));
        Some(Self {
            value: value - value % scale,
            unspecified_digits: digits,
        })
    }

    /// The year value, with unknown digits as zeros
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Number of unknown trailing digits
    pub fn unspecified_digits(&self) -> u8 {
        self.unspecified_digits
    }

    /// Whether every digit is known
    pub fn is_fully_known(&self) -> bool {
        self.unspecified_digits == 0
    }

    /// Whether the year needs the `Y` long-year prefix
    pub fn is_long(&self) -> bool {
        self.value.abs() > MAX_SHORT_YEAR
    }

    /// Earliest and latest concrete years this value may stand for
    pub fn bounds(&self) -> (i64, i64) {
        let span = 10_i64.pow(u32::from(self.unspecified_digits)) - 1;
        if self.value < 0 {
            (self.value - span, self.value)
        } else {
            (self.value, self.value + span)
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_long() {
            return write!(f, "Y{}", self.value);
        }
        if self.value < 0 {
            f.write_str("-")?;
        }
        let digits = format!("{:04}", self.value.abs());
        let known = digits.len() - usize::from(self.unspecified_digits);
        f.write_str(&digits[..known])?;
        for _ in 0..self.unspecified_digits {
            f.write_str("X")?;
        }
        Ok(())
    }
}
