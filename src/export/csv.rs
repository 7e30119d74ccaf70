//! CSV Export functionality
//!
//! Writes the record table and the chart series as spreadsheet-friendly CSV.

use serde::Serialize;
use std::io::Write;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::models::{EnrichedRecord, Money};
use crate::services::optimizer::BucketEfficiency;
use crate::services::ChartPoint;

#[derive(Serialize)]
struct RecordRow<'a> {
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Discount Bin")]
    discount_bin: &'a str,
    #[serde(rename = "Avg Price")]
    avg_price: String,
    #[serde(rename = "Views")]
    views: u64,
    #[serde(rename = "Sales")]
    sales: u64,
    #[serde(rename = "Revenue")]
    revenue: String,
    #[serde(rename = "Conversion Rate")]
    conversion_rate: String,
    #[serde(rename = "Revenue Per Pageview")]
    rpp: String,
}

#[derive(Serialize)]
struct ChartRow<'a> {
    #[serde(rename = "Discount Bin")]
    discount_bin: &'a str,
    #[serde(rename = "Views")]
    views: u64,
    #[serde(rename = "Sales")]
    sales: u64,
    #[serde(rename = "Revenue")]
    revenue: String,
    #[serde(rename = "Conversion Rate")]
    conversion_rate: String,
    #[serde(rename = "Revenue Per View")]
    rpv: String,
}

fn decimal(amount: Money) -> String {
    format!("{}.{:02}", amount.dollars(), amount.cents_part())
}

fn flush<W: Write>(writer: csv::Writer<W>) -> AnalyticsResult<()> {
    writer
        .into_inner()
        .map_err(|e| AnalyticsError::Export(e.to_string()))?
        .flush()
        .map_err(|e| AnalyticsError::Export(e.to_string()))
}

/// Export record rows, one line per category and bin
pub fn export_records_csv<W: Write>(records: &[&EnrichedRecord], writer: W) -> AnalyticsResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for record in records {
        csv_writer.serialize(RecordRow {
            category: record.category.label(),
            discount_bin: record.discount_bin.label(),
            avg_price: decimal(record.avg_price),
            views: record.views,
            sales: record.sales,
            revenue: decimal(record.revenue),
            conversion_rate: format!("{:.1}", record.conversion_rate),
            rpp: format!("{:.2}", record.rpp),
        })?;
    }

    flush(csv_writer)
}

/// Export chart rows with their revenue per view
pub fn export_chart_csv<W: Write>(points: &[ChartPoint], writer: W) -> AnalyticsResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for point in points {
        let efficiency = BucketEfficiency::from(point);
        csv_writer.serialize(ChartRow {
            discount_bin: point.discount_bin.label(),
            views: point.views,
            sales: point.sales,
            revenue: decimal(point.revenue),
            conversion_rate: format!("{:.1}", point.conversion_rate),
            rpv: format!("{:.2}", efficiency.rpv),
        })?;
    }

    flush(csv_writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::models::{Category, CategoryFilter};
    use crate::services::{filter_by_category, select_chart_series};

    #[test]
    fn test_export_records_csv() {
        let dataset = Dataset::sample().unwrap();
        let rows = filter_by_category(dataset.records(), CategoryFilter::Only(Category::TechCoding));

        let mut output = Vec::new();
        export_records_csv(&rows, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0],
            "Category,Discount Bin,Avg Price,Views,Sales,Revenue,Conversion Rate,Revenue Per Pageview"
        );
        assert_eq!(lines[1], "Tech & Coding,0% (Full Price),100.00,1200,60,6000.00,5.0,5.00");
    }

    #[test]
    fn test_export_chart_csv() {
        let dataset = Dataset::sample().unwrap();
        let points = select_chart_series(dataset.records(), CategoryFilter::All).points();

        let mut output = Vec::new();
        export_chart_csv(&points, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("Discount Bin,Views,Sales,Revenue,Conversion Rate,Revenue Per View"));
        assert!(text.contains("60-80% Off,7600,1950,48750.00,25.7,6.41"));
        assert!(text.contains("30-50% Off,5000,730,43800.00,14.6,8.76"));
    }

    #[test]
    fn test_empty_export_writes_nothing() {
        let mut output = Vec::new();
        export_records_csv(&[], &mut output).unwrap();
        assert!(output.is_empty());
    }
}
