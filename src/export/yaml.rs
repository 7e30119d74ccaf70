//! YAML Export functionality
//!
//! Writes the dashboard snapshot as human-readable YAML.

use std::io::Write;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::export::json::DashboardSnapshot;

/// Write a snapshot as YAML, preceded by a comment header
pub fn export_snapshot_yaml<W: Write>(
    snapshot: &DashboardSnapshot,
    writer: &mut W,
) -> AnalyticsResult<()> {
    let header = format!(
        "# Marketplace Analytics Dashboard Snapshot\n\
         # Generated: {}\n\
         # App Version: {}\n\
         # Category: {}\n\n",
        snapshot.exported_at, snapshot.app_version, snapshot.filter
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| AnalyticsError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, snapshot).map_err(|e| AnalyticsError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::models::{Category, CategoryFilter};
    use crate::services::AnalyticsService;

    #[test]
    fn test_yaml_export() {
        let dataset = Dataset::sample().unwrap();
        let service = AnalyticsService::new(&dataset);
        let snapshot = DashboardSnapshot::capture(&service, CategoryFilter::Only(Category::Design));

        let mut output = Vec::new();
        export_snapshot_yaml(&snapshot, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("# Marketplace Analytics Dashboard Snapshot"));
        assert!(text.contains("# Category: Design"));
        assert!(text.contains("series_mode: filtered"));
    }

    #[test]
    fn test_yaml_round_trip() {
        let dataset = Dataset::sample().unwrap();
        let service = AnalyticsService::new(&dataset);
        let snapshot = DashboardSnapshot::capture(&service, CategoryFilter::All);

        let mut output = Vec::new();
        export_snapshot_yaml(&snapshot, &mut output).unwrap();

        let parsed: DashboardSnapshot = serde_yaml::from_slice(&output).unwrap();
        assert_eq!(parsed.records, snapshot.records);
        assert_eq!(parsed.metadata.total_sales, 3015);
    }
}
