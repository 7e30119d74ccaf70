//! Export module for Marketplace Analytics
//!
//! Writes the dashboard for one category selection in several formats:
//! - CSV: the record table or the chart rows (spreadsheet-compatible)
//! - JSON: a machine-readable snapshot with schema version
//! - YAML: the same snapshot, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_chart_csv, export_records_csv};
pub use json::{export_snapshot_json, DashboardSnapshot, EXPORT_SCHEMA_VERSION};
pub use yaml::export_snapshot_yaml;
