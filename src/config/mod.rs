//! Configuration module for envelope-ledger
//!
//! Holds the display settings the records use to render their summaries.

pub mod settings;

pub use settings::Settings;
