//! Savings bucket model
//!
//! A named savings balance. Funds go in with `add_amount` and come out with
//! `remove_amount`; both refuse invalid amounts and leave the balance alone
//! when they do.

use std::fmt;

use log::warn;

use super::money::Money;
use crate::config::Settings;

/// Reasons a savings bucket refuses a change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BucketError {
    /// Tried to add a negative amount
    NegativeAddition,
    /// Tried to add nothing
    ZeroAddition,
    /// Tried to remove a negative amount
    NegativeDeduction,
    /// Tried to remove more than the bucket holds
    InsufficientFunds { requested: Money, available: Money },
}

impl fmt::Display for BucketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAddition => write!(f, "Additional amount cannot be negative."),
            Self::ZeroAddition => write!(f, "Additions cannot be 0"),
            Self::NegativeDeduction => write!(f, "Deduction cannot be negative."),
            Self::InsufficientFunds { .. } => write!(f, "Not enough funds in bucket."),
        }
    }
}

impl std::error::Error for BucketError {}

/// A named savings balance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingsBucket {
    name: String,
    amount: Money,
}

impl SavingsBucket {
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current balance
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// A bucket "exists" while it holds a positive balance
    pub fn bucket_exists(&self) -> bool {
        self.amount.is_positive()
    }

    /// Deposit funds into the bucket
    pub fn add_amount(&mut self, additional: Money) -> Result<(), BucketError> {
        if additional.is_negative() {
            return Err(self.reject(BucketError::NegativeAddition));
        }

        if additional.is_zero() {
            return Err(self.reject(BucketError::ZeroAddition));
        }

        self.amount += additional;
        Ok(())
    }

    /// Withdraw funds from the bucket
    ///
    /// Withdrawing the entire balance is allowed and empties the bucket.
    pub fn remove_amount(&mut self, deduction: Money) -> Result<(), BucketError> {
        if deduction.is_negative() {
            return Err(self.reject(BucketError::NegativeDeduction));
        }

        if deduction > self.amount {
            return Err(self.reject(BucketError::InsufficientFunds {
                requested: deduction,
                available: self.amount,
            }));
        }

        self.amount -= deduction;
        Ok(())
    }

    pub fn describe(&self, settings: &Settings) -> String {
        format!("{}: {}", self.name, settings.format_money(self.amount))
    }

    fn reject(&self, err: BucketError) -> BucketError {
        warn!("Savings bucket '{}': {}", self.name, err);
        err
    }
}

impl fmt::Display for SavingsBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.amount)
    }
}
