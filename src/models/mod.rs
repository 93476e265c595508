//! Core data models for envelope-ledger
//!
//! Five independent finance records (expenses, income, savings buckets,
//! goals and debts) plus the `Money` and `Rate` value types they are built
//! from. No record references another.

pub mod bucket;
pub mod debt;
pub mod expense;
pub mod goal;
pub mod income;
pub mod money;
pub mod rate;

pub use bucket::{BucketError, SavingsBucket};
pub use debt::{Debt, DebtError};
pub use expense::{Expense, ExpenseValidationError};
pub use goal::{Goal, GoalError};
pub use income::{Income, IncomeValidationError};
pub use money::{Money, MoneyParseError};
pub use rate::{Rate, RateParseError};
