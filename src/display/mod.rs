//! Display formatting for terminal output
//!
//! Provides utilities for formatting analysis results for terminal display,
//! including tables, text bars and the proposal catalogue.

pub mod catalogue;
pub mod format;
pub mod table;

pub use catalogue::{format_features, format_logic};
pub use format::{format_bar, format_rate};
pub use table::{format_chart_table, format_record_table};
