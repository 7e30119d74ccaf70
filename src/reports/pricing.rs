//! Pricing Report
//!
//! Revenue, sales and conversion per discount bin for one category
//! selection, with the recommended discount.

use std::io::Write;

use crate::display::format::{double_separator, format_bar, format_rate, separator};
use crate::display::table::format_chart_table;
use crate::error::AnalyticsResult;
use crate::export::export_chart_csv;
use crate::models::CategoryFilter;
use crate::services::{AnalyticsService, ChartPoint, PriceRecommendation};

/// Pricing Report
#[derive(Debug, Clone)]
pub struct PricingReport {
    pub filter: CategoryFilter,
    /// "aggregated" or "filtered"
    pub series_mode: &'static str,
    /// One point per discount bin
    pub points: Vec<ChartPoint>,
    pub recommendation: Option<PriceRecommendation>,
}

impl PricingReport {
    /// Generate the report for a category selection
    pub fn generate(service: &AnalyticsService<'_>, filter: CategoryFilter) -> Self {
        let series = service.chart_series(filter);
        let points = series.points();

        Self {
            filter,
            series_mode: series.mode(),
            recommendation: service.recommendation(filter),
            points,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str, bar_width: usize) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Pricing by Discount: {} ({})\n",
            self.filter.selector_label(),
            self.series_mode
        ));
        output.push_str(&double_separator(80));
        output.push('\n');
        output.push_str(&format_chart_table(&self.points, currency));
        output.push_str("\n\n");

        let max_revenue = self
            .points
            .iter()
            .map(|p| p.revenue.as_f64())
            .fold(0.0, f64::max);
        output.push_str("Revenue\n");
        for point in &self.points {
            output.push_str(&format!(
                "  {:<16} {} {}\n",
                point.discount_bin.label(),
                format_bar(point.revenue.as_f64(), max_revenue, bar_width),
                point.revenue.format_grouped(currency)
            ));
        }

        let max_rate = self
            .points
            .iter()
            .map(|p| p.conversion_rate)
            .fold(0.0, f64::max);
        output.push_str("\nConversion Rate\n");
        for point in &self.points {
            output.push_str(&format!(
                "  {:<16} {} {}\n",
                point.discount_bin.label(),
                format_bar(point.conversion_rate, max_rate, bar_width),
                format_rate(point.conversion_rate)
            ));
        }

        output.push_str(&separator(80));
        output.push('\n');
        match &self.recommendation {
            Some(rec) => output.push_str(&format!(
                "Optimal discount: {} ({} revenue, {:.2} per view, {} conversion)\n",
                rec.recommendation,
                rec.projected_revenue.format_grouped(currency),
                rec.rpv,
                format_rate(rec.conversion_rate)
            )),
            None => output.push_str("Optimal discount: no data\n"),
        }

        output
    }

    /// Export the chart rows to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> AnalyticsResult<()> {
        export_chart_csv(&self.points, writer)
    }
}
