//! envelope-ledger - Personal-finance value objects
//!
//! This library provides the small records a budgeting tool is built from:
//! expenses, income sources, savings buckets, savings goals and debts.
//! Every mutator validates its input and returns an explicit `Result`, so a
//! rejected change never touches the record and the caller can react to the
//! reason instead of scraping console output.
//!
//! # Architecture
//!
//! - `config`: Display settings (currency symbol, date format)
//! - `error`: Custom error types
//! - `models`: The finance records and the `Money`/`Rate` value types
//!
//! # Example
//!
//! ```rust
//! use envelope_ledger::models::{Money, SavingsBucket};
//!
//! let mut bucket = SavingsBucket::new("Emergency Fund", Money::from_cents(10000));
//! bucket.add_amount(Money::from_cents(2500)).unwrap();
//! assert!(bucket.remove_amount(Money::from_cents(50000)).is_err());
//! assert_eq!(bucket.amount().cents(), 12500);
//! ```

pub mod config;
pub mod error;
pub mod models;

#[cfg(test)]
mod test_log;

pub use error::{LedgerError, LedgerResult};
