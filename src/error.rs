//! Custom error types for envelope-ledger
//!
//! Each record keeps its own small rejection enum next to the model (see
//! `models::bucket`, `models::goal`, `models::debt`). This module defines the
//! crate-wide error that wraps them, using thiserror for ergonomic
//! definitions.

use thiserror::Error;

use crate::models::bucket::BucketError;
use crate::models::debt::DebtError;
use crate::models::expense::ExpenseValidationError;
use crate::models::goal::GoalError;
use crate::models::income::IncomeValidationError;
use crate::models::money::MoneyParseError;
use crate::models::rate::RateParseError;

/// The main error type for envelope-ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    MoneyParse(#[from] MoneyParseError),

    #[error(transparent)]
    RateParse(#[from] RateParseError),

    /// A savings bucket refused an addition or deduction
    #[error(transparent)]
    Bucket(#[from] BucketError),

    /// A goal refused a contribution
    #[error(transparent)]
    Goal(#[from] GoalError),

    /// A debt refused a payment
    #[error(transparent)]
    Debt(#[from] DebtError),
}

impl LedgerError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if a record refused a mutation
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Bucket(_) | Self::Goal(_) | Self::Debt(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<ExpenseValidationError> for LedgerError {
    fn from(err: ExpenseValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<IncomeValidationError> for LedgerError {
    fn from(err: IncomeValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type alias for envelope-ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Income, Money, Rate, SavingsBucket};

    #[test]
    fn test_error_display() {
        let err = LedgerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_rejection_keeps_original_message() {
        let err: LedgerError = BucketError::ZeroAddition.into();
        assert_eq!(err.to_string(), "Additions cannot be 0");
        assert!(err.is_rejection());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_question_mark_conversion() {
        fn drain(bucket: &mut SavingsBucket) -> LedgerResult<()> {
            bucket.remove_amount(Money::from_cents(500))?;
            Ok(())
        }

        let mut bucket = SavingsBucket::new("Vacation", Money::from_cents(100));
        let err = drain(&mut bucket).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Bucket(BucketError::InsufficientFunds { .. })
        ));
    }

    #[test]
    fn test_validation_errors_propagate() {
        fn check(expense: &Expense, income: &Income) -> LedgerResult<()> {
            expense.validate()?;
            income.validate()?;
            Ok(())
        }

        let expense = Expense::new("Rent", Money::from_cents(150000), "Bills");
        let income = Income::new("Salary", Money::from_cents(500000), Rate::from_fraction(0.05));
        assert!(check(&expense, &income).is_ok());

        let refund = Expense::new("Refund", Money::from_cents(-100), "Shopping");
        let err = check(&refund, &income).unwrap_err();
        assert!(err.is_validation());
        assert!(!err.is_rejection());
        assert_eq!(
            err.to_string(),
            "Validation error: Expense amount cannot be negative"
        );

        let taxed = Income::new("Salary", Money::from_cents(500000), Rate::from_fraction(1.5));
        let err = check(&expense, &taxed).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let ledger_err: LedgerError = json_err.into();
        assert!(matches!(ledger_err, LedgerError::Json(_)));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ledger_err: LedgerError = io_err.into();
        assert!(matches!(ledger_err, LedgerError::Io(_)));
    }

    #[test]
    fn test_from_money_parse_error() {
        let err: LedgerError = Money::parse("ten").unwrap_err().into();
        assert_eq!(err.to_string(), "Invalid money format: ten");
    }
}
