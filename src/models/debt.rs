//! Debt model
//!
//! An outstanding balance with an interest rate and a due date, paid down
//! with `make_payment`.

use chrono::NaiveDate;
use std::fmt;

use log::warn;

use super::money::Money;
use super::rate::Rate;
use crate::config::Settings;

/// Reasons a debt refuses a payment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebtError {
    NegativePayment,
    PaymentExceedsDebt { payment: Money, outstanding: Money },
}

impl fmt::Display for DebtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativePayment => write!(f, "Payment cannot be negative."),
            Self::PaymentExceedsDebt { .. } => write!(f, "Payment exceeds debt amount."),
        }
    }
}

impl std::error::Error for DebtError {}

/// A debt being paid down
#[derive(Debug, Clone, PartialEq)]
pub struct Debt {
    name: String,
    amount: Money,
    interest_rate: Rate,
    due_date: NaiveDate,
}

impl Debt {
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        interest_rate: Rate,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            interest_rate,
            due_date,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outstanding balance
    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn interest_rate(&self) -> Rate {
        self.interest_rate
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn is_paid_off(&self) -> bool {
        !self.amount.is_positive()
    }

    /// Pay down the balance
    ///
    /// Paying exactly the outstanding balance clears the debt; paying more
    /// is refused.
    pub fn make_payment(&mut self, payment: Money) -> Result<(), DebtError> {
        let rejection = if payment.is_negative() {
            Some(DebtError::NegativePayment)
        } else if payment > self.amount {
            Some(DebtError::PaymentExceedsDebt {
                payment,
                outstanding: self.amount,
            })
        } else {
            None
        };

        if let Some(err) = rejection {
            warn!("Debt '{}': {}", self.name, err);
            return Err(err);
        }

        self.amount -= payment;
        Ok(())
    }

    pub fn describe(&self, settings: &Settings) -> String {
        format!(
            "{}: {} at {}, due {}",
            self.name,
            settings.format_money(self.amount),
            self.interest_rate,
            settings.format_date(self.due_date)
        )
    }
}

impl fmt::Display for Debt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} at {}, due {}",
            self.name,
            self.amount,
            self.interest_rate,
            self.due_date.format("%Y-%m-%d")
        )
    }
}
