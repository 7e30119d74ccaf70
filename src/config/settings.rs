//! User settings for Marketplace Analytics
//!
//! Manages display preferences: currency symbol, the category selected on
//! start-up, the view the TUI opens on, bar widths and audit logging.

use serde::{Deserialize, Serialize};

use super::paths::AnalyticsPaths;
use crate::error::AnalyticsError;
use crate::models::CategoryFilter;

/// View shown first when the TUI starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StartView {
    /// Proposed features overview (default)
    #[default]
    Features,
    /// Pricing algorithm walkthrough
    Logic,
    /// Charts, insights and the record table
    Analysis,
}

/// User settings for Marketplace Analytics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when formatting revenue and prices
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Category selection used when none is given
    #[serde(default)]
    pub default_filter: CategoryFilter,

    /// View the TUI opens on
    #[serde(default)]
    pub start_view: StartView,

    /// Width in characters of the text bars in terminal reports
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,

    /// Whether analysis runs are appended to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_bar_width() -> usize {
    30
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_filter: CategoryFilter::default(),
            start_view: StartView::default(),
            bar_width: default_bar_width(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &AnalyticsPaths) -> Result<Self, AnalyticsError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                AnalyticsError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                AnalyticsError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AnalyticsPaths) -> Result<(), AnalyticsError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            AnalyticsError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            AnalyticsError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
