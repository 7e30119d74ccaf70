use anyhow::Result;
use clap::{Parser, Subcommand};

use marketplace_analytics::audit::AuditLogger;
use marketplace_analytics::cli::{
    handle_export_command, handle_features_command, handle_log_command, handle_logic_command,
    handle_report_command, ExportArgs, ReportCommands,
};
use marketplace_analytics::config::{AnalyticsPaths, Settings};
use marketplace_analytics::dataset::Dataset;
use marketplace_analytics::services::AnalyticsService;

#[derive(Parser)]
#[command(
    name = "analytics",
    version,
    about = "Discount pricing analysis for a course marketplace",
    long_about = "Marketplace Analytics compares revenue, sales volume and conversion \
                  across discount depths and content categories, and recommends the \
                  discount that earns the most revenue."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard
    #[command(alias = "ui")]
    Tui,

    /// List the proposed analytical features
    Features,

    /// Walk through the dynamic pricing logic
    Logic,

    /// Analysis reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export the dashboard for one category
    Export(ExportArgs),

    /// Show recent analysis runs
    Log {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Print raw JSON lines
        #[arg(long)]
        json: bool,
    },

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = AnalyticsPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let audit = AuditLogger::new(paths.audit_log());

    let dataset = Dataset::sample()?;
    let service = AnalyticsService::new(&dataset);

    match cli.command {
        Some(Commands::Tui) => {
            marketplace_analytics::tui::run_tui(service, &settings, &audit)?;
        }
        Some(Commands::Features) => handle_features_command(),
        Some(Commands::Logic) => handle_logic_command(),
        Some(Commands::Report(cmd)) => {
            handle_report_command(&service, &settings, &audit, cmd)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&service, &settings, &paths, &audit, args)?;
        }
        Some(Commands::Log { limit, json }) => {
            handle_log_command(&audit, &settings, limit, json)?;
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("Marketplace Analytics Configuration");
            println!("===================================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Exports directory: {}", paths.exports_dir().display());
            println!("Audit log:         {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Default filter:  {}", settings.default_filter.selector_label());
            println!("  Start view:      {:?}", settings.start_view);
            println!("  Bar width:       {}", settings.bar_width);
            println!("  Audit enabled:   {}", settings.audit_enabled);
            println!();
            println!(
                "Dataset: {} records, {} views, {} sales",
                dataset.len(),
                dataset.total_views(),
                dataset.total_sales()
            );
        }
        None => {
            println!("Marketplace Analytics - discount pricing analysis");
            println!();
            println!("Run 'analytics --help' for usage information.");
            println!("Run 'analytics tui' to launch the interactive dashboard.");
        }
    }

    Ok(())
}
