//! CLI command for dashboard export
//!
//! Writes the dashboard for one category selection to a file.

use chrono::Utc;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{AnalyticsPaths, Settings};
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::export::{
    export_chart_csv, export_records_csv, export_snapshot_json, export_snapshot_yaml,
    DashboardSnapshot,
};
use crate::models::CategoryFilter;
use crate::services::AnalyticsService;

use super::{record_run, resolve_filter};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (one table only)
    Csv,
    /// JSON format (full snapshot)
    Json,
    /// YAML format (full snapshot, human-readable)
    Yaml,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Table written by a CSV export
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CsvTable {
    /// Record table rows
    Records,
    /// Chart rows, one per discount bin
    Buckets,
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path (defaults to a timestamped file in the exports directory)
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Category to export ("All", "Tech & Coding", "Business", "Design")
    #[arg(short, long)]
    pub category: Option<String>,

    /// Table to write for CSV exports
    #[arg(long, value_enum, default_value = "records")]
    pub table: CsvTable,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(
    service: &AnalyticsService<'_>,
    settings: &Settings,
    paths: &AnalyticsPaths,
    audit: &AuditLogger,
    args: ExportArgs,
) -> AnalyticsResult<()> {
    let filter = resolve_filter(args.category.as_deref(), settings)?;

    let output = match args.output.clone() {
        Some(path) => path,
        None => {
            paths.ensure_directories()?;
            paths.exports_dir().join(format!(
                "dashboard-{}.{}",
                Utc::now().format("%Y%m%d-%H%M%S"),
                args.format.extension()
            ))
        }
    };

    let file = File::create(&output).map_err(|e| {
        AnalyticsError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    let view = service.dashboard(filter);
    write_dashboard(service, filter, &args, &mut writer)?;

    println!(
        "{} dashboard exported to: {}",
        filter.selector_label(),
        output.display()
    );

    record_run(
        audit,
        settings,
        &AuditEntry::export(&view, output.display().to_string()),
    )
}

/// Write the requested format and flush it, so a failed final write is reported
fn write_dashboard<W: Write>(
    service: &AnalyticsService<'_>,
    filter: CategoryFilter,
    args: &ExportArgs,
    writer: &mut W,
) -> AnalyticsResult<()> {
    match args.format {
        ExportFormat::Csv => {
            let view = service.dashboard(filter);
            match args.table {
                CsvTable::Records => export_records_csv(&view.table_rows, &mut *writer)?,
                CsvTable::Buckets => export_chart_csv(&view.chart_series.points(), &mut *writer)?,
            }
        }
        ExportFormat::Json => {
            let snapshot = DashboardSnapshot::capture(service, filter);
            export_snapshot_json(&snapshot, &mut *writer, args.pretty)?;
        }
        ExportFormat::Yaml => {
            let snapshot = DashboardSnapshot::capture(service, filter);
            export_snapshot_yaml(&snapshot, &mut *writer)?;
        }
    }

    writer
        .flush()
        .map_err(|e| AnalyticsError::Export(format!("Failed to flush export: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use std::io;

    /// Accepts writes but fails when flushed
    struct FlushFails(Vec<u8>);

    impl Write for FlushFails {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }
    }

    fn args(format: ExportFormat) -> ExportArgs {
        ExportArgs {
            output: None,
            format,
            category: None,
            table: CsvTable::Records,
            pretty: false,
        }
    }

    #[test]
    fn test_write_dashboard_json() {
        let dataset = Dataset::sample().unwrap();
        let service = AnalyticsService::new(&dataset);
        let mut out = Vec::new();

        write_dashboard(&service, CategoryFilter::All, &args(ExportFormat::Json), &mut out).unwrap();

        let snapshot: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(snapshot["series_mode"], "aggregated");
    }

    #[test]
    fn test_failed_flush_is_reported() {
        let dataset = Dataset::sample().unwrap();
        let service = AnalyticsService::new(&dataset);

        for format in [ExportFormat::Json, ExportFormat::Yaml] {
            let mut out = FlushFails(Vec::new());
            let err = write_dashboard(&service, CategoryFilter::All, &args(format), &mut out)
                .unwrap_err();
            assert!(matches!(err, AnalyticsError::Export(_)));
            assert!(err.to_string().contains("disk full"));
            assert!(!out.0.is_empty());
        }
    }
}
