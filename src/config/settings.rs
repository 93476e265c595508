//! Display settings for envelope-ledger
//!
//! Controls how the records render money, dates and progress percentages in
//! their `describe` summaries. Settings are stored as JSON.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::path::Path;

use crate::error::LedgerError;
use crate::models::Money;

/// User display settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol placed in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Decimal places shown for progress percentages
    #[serde(default = "default_progress_decimals")]
    pub progress_decimals: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_progress_decimals() -> usize {
    1
}

fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            progress_decimals: default_progress_decimals(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_default(path: &Path) -> Result<Self, LedgerError> {
        if !path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            LedgerError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Check that the settings can be used for formatting
    pub fn validate(&self) -> Result<(), LedgerError> {
        if !is_valid_date_format(&self.date_format) {
            return Err(LedgerError::Config(format!(
                "Invalid date format: {}",
                self.date_format
            )));
        }

        Ok(())
    }

    /// Save settings to disk, creating the parent directory if needed
    pub fn save(&self, path: &Path) -> Result<(), LedgerError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;

        std::fs::write(path, contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Format a date, falling back to ISO 8601 if `date_format` is invalid
    pub fn format_date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.date_format)).is_err() {
            return date.format(&default_date_format()).to_string();
        }
        out
    }

    pub fn format_progress(&self, progress: f64) -> String {
        format!("{:.*}%", self.progress_decimals, progress)
    }
}
