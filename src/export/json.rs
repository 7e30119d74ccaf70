//! JSON Export functionality
//!
//! Exports a dashboard snapshot for one category selection, with schema
//! versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::models::{CategoryFilter, EnrichedRecord, Money};
use crate::services::{AnalyticsService, ChartPoint, Insights, PriceRecommendation};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Everything the analysis view shows for one filter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub filter: CategoryFilter,

    /// "aggregated" when `chart` holds per-bin sums, "filtered" otherwise
    pub series_mode: String,

    /// Record table rows
    pub records: Vec<EnrichedRecord>,

    /// Chart rows
    pub chart: Vec<ChartPoint>,

    pub recommendation: Option<PriceRecommendation>,

    pub insights: Option<Insights>,

    pub metadata: SnapshotMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    pub record_count: usize,
    pub chart_row_count: usize,
    pub total_views: u64,
    pub total_sales: u64,
    pub total_revenue: Money,
}

impl DashboardSnapshot {
    /// Capture the dashboard for `filter`
    pub fn capture(service: &AnalyticsService<'_>, filter: CategoryFilter) -> Self {
        let view = service.dashboard(filter);
        let records: Vec<EnrichedRecord> = view.table_rows.iter().map(|r| (*r).clone()).collect();
        let chart = view.chart_series.points();

        let metadata = SnapshotMetadata {
            record_count: records.len(),
            chart_row_count: chart.len(),
            total_views: view.total_views(),
            total_sales: view.total_sales(),
            total_revenue: view.total_revenue(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            filter,
            series_mode: view.chart_series.mode().to_string(),
            records,
            chart,
            recommendation: service.recommendation(filter),
            insights: service.insights(filter),
            metadata,
        }
    }
}

/// Write a snapshot as JSON
pub fn export_snapshot_json<W: Write>(
    snapshot: &DashboardSnapshot,
    writer: &mut W,
    pretty: bool,
) -> AnalyticsResult<()> {
    let written = if pretty {
        serde_json::to_writer_pretty(&mut *writer, snapshot)
    } else {
        serde_json::to_writer(&mut *writer, snapshot)
    };
    written.map_err(|e| AnalyticsError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| AnalyticsError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::models::{Category, DiscountBin};

    #[test]
    fn test_capture_all() {
        let dataset = Dataset::sample().unwrap();
        let service = AnalyticsService::new(&dataset);
        let snapshot = DashboardSnapshot::capture(&service, CategoryFilter::All);

        assert_eq!(snapshot.series_mode, "aggregated");
        assert_eq!(snapshot.metadata.record_count, 12);
        assert_eq!(snapshot.metadata.chart_row_count, 4);
        assert_eq!(snapshot.metadata.total_views, 19_100);
        assert_eq!(
            snapshot.recommendation.as_ref().unwrap().recommendation,
            DiscountBin::Deep
        );
    }

    #[test]
    fn test_json_export_round_trip() {
        let dataset = Dataset::sample().unwrap();
        let service = AnalyticsService::new(&dataset);
        let snapshot =
            DashboardSnapshot::capture(&service, CategoryFilter::Only(Category::Business));

        let mut output = Vec::new();
        export_snapshot_json(&snapshot, &mut output, true).unwrap();

        let parsed: DashboardSnapshot = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.filter, CategoryFilter::Only(Category::Business));
        assert_eq!(parsed.series_mode, "filtered");
        assert_eq!(parsed.records, snapshot.records);
        assert_eq!(parsed.chart, snapshot.chart);
    }

    #[test]
    fn test_json_uses_readable_labels() {
        let dataset = Dataset::sample().unwrap();
        let service = AnalyticsService::new(&dataset);
        let snapshot = DashboardSnapshot::capture(&service, CategoryFilter::All);

        let mut output = Vec::new();
        export_snapshot_json(&snapshot, &mut output, false).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("\"filter\":\"All\""));
        assert!(text.contains("\"discount_bin\":\"60-80% Off\""));
        assert!(text.contains("\"category\":\"Tech & Coding\""));
    }
}
