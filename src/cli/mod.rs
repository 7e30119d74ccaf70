//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the analysis layer.

pub mod catalogue;
pub mod export;
pub mod log;
pub mod report;

pub use catalogue::{handle_features_command, handle_logic_command};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use log::handle_log_command;
pub use report::{handle_report_command, ReportCommands};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::Settings;
use crate::error::AnalyticsResult;
use crate::models::CategoryFilter;

/// Resolve a `--category` argument, falling back to the configured default
pub fn resolve_filter(
    category: Option<&str>,
    settings: &Settings,
) -> AnalyticsResult<CategoryFilter> {
    match category {
        Some(selection) => selection.parse(),
        None => Ok(settings.default_filter),
    }
}

/// Append an entry to the audit log when auditing is enabled
pub fn record_run(
    audit: &AuditLogger,
    settings: &Settings,
    entry: &AuditEntry,
) -> AnalyticsResult<()> {
    if settings.audit_enabled {
        audit.log(entry)?;
    }
    Ok(())
}
