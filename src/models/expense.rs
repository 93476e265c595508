//! Expense model
//!
//! A named, categorized outflow. Expenses are read-only once constructed.

use std::fmt;

use super::money::Money;
use crate::config::Settings;

/// A single expense
///
/// Construction never fails: zero and negative amounts are stored as given.
/// Call [`Expense::validate`] to check a record before trusting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    name: String,
    amount: Money,
    expense_type: String,
}

impl Expense {
    /// Create a new expense
    pub fn new(name: impl Into<String>, amount: Money, expense_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            expense_type: expense_type.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    /// The category this expense is filed under (e.g. "Groceries")
    pub fn expense_type(&self) -> &str {
        &self.expense_type
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }

        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount);
        }

        Ok(())
    }

    /// One-line summary rendered with the given settings
    pub fn describe(&self, settings: &Settings) -> String {
        format!(
            "{}: {} ({})",
            self.name,
            settings.format_money(self.amount),
            self.expense_type
        )
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.name, self.amount, self.expense_type)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    NegativeAmount,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
            Self::NegativeAmount => write!(f, "Expense amount cannot be negative"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
