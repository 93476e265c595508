//! Income model
//!
//! A named income source with the state tax rate withheld from it.

use std::fmt;

use super::money::Money;
use super::rate::Rate;
use crate::config::Settings;

/// Validation errors for income sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    EmptySource,
    NegativeAmount,
    InvalidTaxRate,
}

impl fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySource => write!(f, "Income source cannot be empty"),
            Self::NegativeAmount => write!(f, "Income amount cannot be negative"),
            Self::InvalidTaxRate => write!(f, "State tax rate must be between 0% and 100%"),
        }
    }
}

impl std::error::Error for IncomeValidationError {}

/// An income source
///
/// Like [`Expense`](super::Expense), an income record is read-only and its
/// constructor accepts any values.
#[derive(Debug, Clone, PartialEq)]
pub struct Income {
    source: String,
    amount: Money,
    state_tax_rate: Rate,
}

impl Income {
    pub fn new(source: impl Into<String>, amount: Money, state_tax_rate: Rate) -> Self {
        Self {
            source: source.into(),
            amount,
            state_tax_rate,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Gross amount, before state tax
    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn state_tax_rate(&self) -> Rate {
        self.state_tax_rate
    }

    /// State tax owed on the gross amount
    pub fn state_tax(&self) -> Money {
        self.state_tax_rate.apply_to(self.amount)
    }

    /// Amount left after state tax
    pub fn net_amount(&self) -> Money {
        self.amount - self.state_tax()
    }

    /// Validate the income source
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if self.source.trim().is_empty() {
            return Err(IncomeValidationError::EmptySource);
        }

        if self.amount.is_negative() {
            return Err(IncomeValidationError::NegativeAmount);
        }

        let rate = self.state_tax_rate.fraction();
        if !(0.0..=1.0).contains(&rate) {
            return Err(IncomeValidationError::InvalidTaxRate);
        }

        Ok(())
    }

    pub fn describe(&self, settings: &Settings) -> String {
        format!(
            "{}: {} ({} state tax, {} net)",
            self.source,
            settings.format_money(self.amount),
            self.state_tax_rate,
            settings.format_money(self.net_amount())
        )
    }
}

impl fmt::Display for Income {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({} state tax)",
            self.source, self.amount, self.state_tax_rate
        )
    }
}
