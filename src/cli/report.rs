//! CLI commands for reports
//!
//! Provides commands for printing and exporting the analysis reports.

use clap::Subcommand;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::Settings;
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::reports::{InsightsReport, PricingReport, RecordTableReport};
use crate::services::AnalyticsService;

use super::{record_run, resolve_filter};

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show the enriched record table
    #[command(alias = "table")]
    Records {
        /// Category to show ("All", "Tech & Coding", "Business", "Design")
        #[arg(short, long)]
        category: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show revenue, sales and conversion per discount bin
    #[command(alias = "pricing")]
    Buckets {
        /// Category to show ("All", "Tech & Coding", "Business", "Design")
        #[arg(short, long)]
        category: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show pricing insights
    Insights {
        /// Category to show ("All", "Tech & Coding", "Business", "Design")
        #[arg(short, long)]
        category: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    service: &AnalyticsService<'_>,
    settings: &Settings,
    audit: &AuditLogger,
    cmd: ReportCommands,
) -> AnalyticsResult<()> {
    let currency = settings.currency_symbol.as_str();

    let (kind, filter) = match cmd {
        ReportCommands::Records { category, output } => {
            let filter = resolve_filter(category.as_deref(), settings)?;
            let report = RecordTableReport::generate(service, filter);
            emit(
                output.as_deref(),
                || report.format_terminal(currency),
                |w| report.export_csv(w),
            )?;
            ("records", filter)
        }
        ReportCommands::Buckets { category, output } => {
            let filter = resolve_filter(category.as_deref(), settings)?;
            let report = PricingReport::generate(service, filter);
            emit(
                output.as_deref(),
                || report.format_terminal(currency, settings.bar_width),
                |w| report.export_csv(w),
            )?;
            ("buckets", filter)
        }
        ReportCommands::Insights { category, output } => {
            let filter = resolve_filter(category.as_deref(), settings)?;
            let report = InsightsReport::generate(service, filter);
            emit(
                output.as_deref(),
                || report.format_terminal(currency),
                |w| report.export_csv(w),
            )?;
            ("insights", filter)
        }
    };

    record_run(audit, settings, &AuditEntry::report(&service.dashboard(filter), kind))
}

/// Print a report, or write it as CSV when an output path is given
fn emit<T, E>(output: Option<&Path>, terminal: T, export: E) -> AnalyticsResult<()>
where
    T: FnOnce() -> String,
    E: FnOnce(&mut BufWriter<File>) -> AnalyticsResult<()>,
{
    let Some(path) = output else {
        println!("{}", terminal());
        return Ok(());
    };

    let file = File::create(path).map_err(|e| {
        AnalyticsError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    export(&mut writer)?;

    println!("Report exported to: {}", path.display());
    Ok(())
}
