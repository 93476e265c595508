//! Rate type for tax and interest rates
//!
//! Stored as a plain fraction (0.05 is five percent). Rates are descriptive
//! attributes of a record, so nothing here rejects out-of-range values.

use std::fmt;

use super::money::Money;

/// A fractional rate such as a state tax rate or an interest rate
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Rate(f64);

impl Rate {
    /// Create a rate from a fraction
    ///
    /// # Examples
    /// ```
    /// use envelope_ledger::models::Rate;
    /// let rate = Rate::from_fraction(0.0525);
    /// assert_eq!(rate.to_string(), "5.25%");
    /// ```
    pub const fn from_fraction(fraction: f64) -> Self {
        Self(fraction)
    }

    /// Create a rate from a percentage (5.0 means 5%)
    pub fn from_percent(percent: f64) -> Self {
        Self(percent / 100.0)
    }

    pub const fn zero() -> Self {
        Self(0.0)
    }

    pub const fn fraction(&self) -> f64 {
        self.0
    }

    pub fn percent(&self) -> f64 {
        self.0 * 100.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Apply the rate to an amount, rounded to the nearest cent
    pub fn apply_to(&self, amount: Money) -> Money {
        Money::from_cents((amount.as_f64() * self.0).round() as i64)
    }

    /// Parse a rate from a string
    ///
    /// A trailing `%` marks a percentage ("5.25%", "5 %"); a bare number is
    /// read as a fraction ("0.0525").
    pub fn parse(s: &str) -> Result<Self, RateParseError> {
        let s = s.trim();
        let invalid = || RateParseError::InvalidFormat(s.to_string());

        match s.strip_suffix('%') {
            Some(percent) => {
                let value: f64 = percent.trim_end().parse().map_err(|_| invalid())?;
                if !value.is_finite() {
                    return Err(invalid());
                }
                Ok(Self::from_percent(value))
            }
            None => {
                let value: f64 = s.parse().map_err(|_| invalid())?;
                if !value.is_finite() {
                    return Err(invalid());
                }
                Ok(Self::from_fraction(value))
            }
        }
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let percent = format!("{:.2}", self.percent());
        let trimmed = percent.trim_end_matches('0').trim_end_matches('.');
        write!(f, "{}%", trimmed)
    }
}

/// Error type for rate parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateParseError {
    InvalidFormat(String),
}

impl fmt::Display for RateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateParseError::InvalidFormat(s) => write!(f, "Invalid rate format: {}", s),
        }
    }
}

impl std::error::Error for RateParseError {}
