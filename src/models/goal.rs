//! Savings goal model
//!
//! Tracks how much has been put toward a target amount, the percentage of
//! the target reached, and an optional deadline.

use chrono::NaiveDate;
use std::fmt;

use log::{info, warn};

use super::money::Money;
use crate::config::Settings;

/// Reasons a goal refuses a contribution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalError {
    NegativeContribution,
}

impl fmt::Display for GoalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeContribution => write!(f, "Cannot add negative amount."),
        }
    }
}

impl std::error::Error for GoalError {}

/// A savings goal
#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    name: String,
    target_amount: Money,
    current_amount: Money,
    /// Last value returned by [`Goal::progress`]
    progress: f64,
    deadline: Option<NaiveDate>,
}

impl Goal {
    /// Create a new goal with nothing saved and no deadline
    pub fn new(name: impl Into<String>, target_amount: Money) -> Self {
        Self::with_progress(name, target_amount, Money::zero(), None)
    }

    /// Create a goal that already has money put toward it
    pub fn with_progress(
        name: impl Into<String>,
        target_amount: Money,
        current_amount: Money,
        deadline: Option<NaiveDate>,
    ) -> Self {
        Self {
            name: name.into(),
            target_amount,
            current_amount,
            progress: 0.0,
            deadline,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target_amount(&self) -> Money {
        self.target_amount
    }

    pub fn current_amount(&self) -> Money {
        self.current_amount
    }

    /// The progress percentage as of the last call to [`Goal::progress`]
    pub fn cached_progress(&self) -> f64 {
        self.progress
    }

    pub fn deadline(&self) -> Option<NaiveDate> {
        self.deadline
    }

    pub fn set_deadline(&mut self, deadline: Option<NaiveDate>) {
        self.deadline = deadline;
    }

    /// Put money toward the goal
    ///
    /// There is no upper bound; a goal can be overfunded.
    pub fn add_to_goal(&mut self, amount: Money) -> Result<(), GoalError> {
        if amount.is_negative() {
            let err = GoalError::NegativeContribution;
            warn!("Goal '{}': {}", self.name, err);
            return Err(err);
        }

        self.current_amount += amount;
        Ok(())
    }

    pub fn is_goal_met(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// How much is still needed to meet the goal
    pub fn remaining_amount(&self) -> Money {
        if self.is_goal_met() {
            Money::zero()
        } else {
            self.target_amount - self.current_amount
        }
    }

    /// Percentage of the target reached, clamped to 0..=100
    ///
    /// A zero target always reports 0. The result is cached and can be read
    /// back with [`Goal::cached_progress`].
    pub fn progress(&mut self) -> f64 {
        let progress = if self.target_amount.is_zero() {
            0.0
        } else if self.current_amount.is_negative() {
            warn!("Goal '{}': Current amount cannot be negative.", self.name);
            0.0
        } else if self.current_amount > self.target_amount {
            info!("Goal '{}': Current amount exceeds target amount.", self.name);
            100.0
        } else {
            self.current_amount.as_f64() / self.target_amount.as_f64() * 100.0
        };

        self.progress = progress;
        progress
    }

    pub fn describe(&self, settings: &Settings) -> String {
        let mut line = format!(
            "{}: {} of {} ({})",
            self.name,
            settings.format_money(self.current_amount),
            settings.format_money(self.target_amount),
            settings.format_progress(self.progress)
        );
        if let Some(deadline) = self.deadline {
            line.push_str(&format!(" by {}", settings.format_date(deadline)));
        }
        line
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {}",
            self.name, self.current_amount, self.target_amount
        )
    }
}
