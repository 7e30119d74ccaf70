//! Path management for Marketplace Analytics
//!
//! Provides XDG-compliant path resolution for settings, the audit log and
//! default export output.
//!
//! ## Path Resolution Order
//!
//! 1. `MARKETPLACE_ANALYTICS_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/marketplace-analytics` or `~/.config/marketplace-analytics`
//! 3. Windows: `%APPDATA%\marketplace-analytics`

use std::path::PathBuf;

use crate::error::AnalyticsError;

/// Environment variable overriding the base directory
pub const DIR_ENV_VAR: &str = "MARKETPLACE_ANALYTICS_DIR";

const APP_DIR_NAME: &str = "marketplace-analytics";

/// Manages all paths used by Marketplace Analytics
#[derive(Debug, Clone)]
pub struct AnalyticsPaths {
    base_dir: PathBuf,
}

impl AnalyticsPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or application data directory can be determined.
    pub fn new() -> Result<Self, AnalyticsError> {
        let base_dir = if let Ok(custom) = std::env::var(DIR_ENV_VAR) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Default directory for exported snapshots
    pub fn exports_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base and export directories exist
    pub fn ensure_directories(&self) -> Result<(), AnalyticsError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| AnalyticsError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.exports_dir())
            .map_err(|e| AnalyticsError::Io(format!("Failed to create exports directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, AnalyticsError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| AnalyticsError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join(APP_DIR_NAME))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, AnalyticsError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| AnalyticsError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join(APP_DIR_NAME))
}
