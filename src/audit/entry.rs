//! Audit entry data structures
//!
//! Defines the operations that are audited and the entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{CategoryFilter, Money};
use crate::services::DashboardView;

/// Kinds of analysis runs that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// A terminal report was generated
    Report,
    /// A snapshot was written to a file
    Export,
    /// The category filter changed in the TUI
    Select,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Report => write!(f, "REPORT"),
            Operation::Export => write!(f, "EXPORT"),
            Operation::Select => write!(f, "SELECT"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Unique id of this run
    pub run_id: Uuid,

    /// When the run happened (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// Category selection in effect
    pub filter: CategoryFilter,

    /// "aggregated" or "filtered"
    pub series_mode: String,

    /// Rows in the record table
    pub table_rows: usize,

    /// Rows in the chart series
    pub chart_rows: usize,

    pub total_sales: u64,

    pub total_revenue: Money,

    /// Free-form detail, e.g. the report kind or output path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl AuditEntry {
    /// Record a run over `view`
    pub fn new(operation: Operation, view: &DashboardView<'_>, detail: Option<String>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            operation,
            filter: view.filter,
            series_mode: view.chart_series.mode().to_string(),
            table_rows: view.table_rows.len(),
            chart_rows: view.chart_series.len(),
            total_sales: view.total_sales(),
            total_revenue: view.total_revenue(),
            detail,
        }
    }

    pub fn report(view: &DashboardView<'_>, kind: &str) -> Self {
        Self::new(Operation::Report, view, Some(kind.to_string()))
    }

    pub fn export(view: &DashboardView<'_>, destination: impl Into<String>) -> Self {
        Self::new(Operation::Export, view, Some(destination.into()))
    }

    pub fn select(view: &DashboardView<'_>) -> Self {
        Self::new(Operation::Select, view, None)
    }

    /// Format the entry as a single human-readable line
    pub fn format_human_readable(&self, currency: &str) -> String {
        let mut line = format!(
            "{} {:<6} [{}] {} rows ({}), {} sales, {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.operation.to_string(),
            self.filter,
            self.table_rows,
            self.series_mode,
            self.total_sales,
            self.total_revenue.format_grouped(currency),
        );
        if let Some(detail) = &self.detail {
            line.push_str(&format!(" - {}", detail));
        }
        line
    }
}
