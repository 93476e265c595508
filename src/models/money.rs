//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so balances add and subtract
//! exactly. Arithmetic saturates at the i64 bounds instead of wrapping.
//! Negative values are representable; the records decide for themselves
//! whether to accept them.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use envelope_ledger::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from dollars and cents
    pub const fn from_dollars_cents(dollars: i64, cents: i64) -> Self {
        Self(dollars.saturating_mul(100).saturating_add(cents))
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// The amount as a floating-point number of cents, for ratios
    pub(crate) fn as_f64(&self) -> f64 {
        self.0 as f64
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "-$10.50", "10"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s.trim();

        let (negative, s) = match original.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, original),
        };

        let s = s.strip_prefix('$').unwrap_or(s);
        let invalid = || MoneyParseError::InvalidFormat(original.to_string());

        // The sign is only allowed once, in front of the symbol
        if s.starts_with(['-', '+']) {
            return Err(invalid());
        }

        let cents = match s.split_once('.') {
            Some((whole, fraction)) => {
                if whole.is_empty() && fraction.is_empty() {
                    return Err(invalid());
                }
                if fraction.contains('.') || !fraction.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }

                let dollars: i64 = if whole.is_empty() {
                    0
                } else {
                    whole.parse().map_err(|_| invalid())?
                };

                // Pad or truncate cents to 2 digits
                let cents: i64 = match fraction.len() {
                    0 => 0,
                    1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
                    _ => fraction[..2].parse().map_err(|_| invalid())?,
                };

                dollars
                    .checked_mul(100)
                    .and_then(|c| c.checked_add(cents))
                    .ok_or_else(invalid)?
            }
            None => s
                .parse::<i64>()
                .map_err(|_| invalid())?
                .checked_mul(100)
                .ok_or_else(invalid)?,
        };

        // cents is never negative here, so negation cannot overflow
        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_from_dollars_cents() {
        assert_eq!(Money::from_dollars_cents(10, 50).cents(), 1050);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(123456).format_with_symbol("€"), "€1234.56");
        assert_eq!(Money::from_cents(-75).format_with_symbol("£"), "-£0.75");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);

        let mut c = a;
        c += b;
        c -= Money::from_cents(200);
        assert_eq!(c.cents(), 1300);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("-$10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("1.x5").is_err());
        assert_eq!(
            Money::parse("$ten"),
            Err(MoneyParseError::InvalidFormat("$ten".to_string()))
        );
    }

    #[test]
    fn test_parse_out_of_range() {
        assert!(Money::parse("99999999999999999").is_err());
        assert!(Money::parse("-99999999999999999").is_err());
        assert!(Money::parse("92233720368547758.08").is_err());
        assert!(Money::parse("9223372036854775807").is_err());
        assert_eq!(
            Money::parse("$92233720368547758.08").unwrap_err(),
            MoneyParseError::InvalidFormat("$92233720368547758.08".to_string())
        );
        assert_eq!(
            Money::parse("92233720368547758.07").unwrap().cents(),
            i64::MAX
        );
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from_cents(i64::MAX);
        let min = Money::from_cents(i64::MIN);

        assert_eq!((max + Money::from_cents(1)).cents(), i64::MAX);
        assert_eq!((min - Money::from_cents(1)).cents(), i64::MIN);
        assert_eq!((-min).cents(), i64::MAX);
        assert_eq!(min.abs().cents(), i64::MAX);

        let mut m = max;
        m += Money::from_cents(500);
        assert_eq!(m.cents(), i64::MAX);
        m = min;
        m -= Money::from_cents(500);
        assert_eq!(m.cents(), i64::MIN);
    }

    #[test]
    fn test_comparison() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert!(a > b);
        assert!(b < a);
        assert_eq!(a, Money::from_cents(1000));
    }

    #[test]
    fn test_is_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_cents(100).is_positive());
        assert!(Money::from_cents(-100).is_negative());
        assert_eq!(Money::from_cents(-100).abs().cents(), 100);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 200, 300].into_iter().map(Money::from_cents).sum();
        assert_eq!(total.cents(), 600);
    }
}
