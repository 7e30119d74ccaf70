//! Record Table Report
//!
//! The enriched records for one category selection, as shown in the
//! sample data set preview.

use std::io::Write;

use crate::display::format::double_separator;
use crate::display::table::format_record_table;
use crate::error::AnalyticsResult;
use crate::export::export_records_csv;
use crate::models::{group_thousands, CategoryFilter, EnrichedRecord, Money};
use crate::services::AnalyticsService;

/// Record Table Report
#[derive(Debug, Clone)]
pub struct RecordTableReport {
    pub filter: CategoryFilter,
    pub rows: Vec<EnrichedRecord>,
    pub total_views: u64,
    pub total_sales: u64,
    pub total_revenue: Money,
}

impl RecordTableReport {
    pub fn generate(service: &AnalyticsService<'_>, filter: CategoryFilter) -> Self {
        let rows: Vec<EnrichedRecord> = service
            .table_rows(filter)
            .into_iter()
            .cloned()
            .collect();

        Self {
            filter,
            total_views: rows.iter().fold(0u64, |acc, r| acc.saturating_add(r.views)),
            total_sales: rows.iter().fold(0u64, |acc, r| acc.saturating_add(r.sales)),
            total_revenue: rows.iter().map(|r| r.revenue).sum(),
            rows,
        }
    }

    fn row_refs(&self) -> Vec<&EnrichedRecord> {
        self.rows.iter().collect()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Sample Data Set: {}\n",
            self.filter.selector_label()
        ));
        output.push_str(&double_separator(80));
        output.push('\n');
        output.push_str(&format_record_table(&self.row_refs(), currency));
        output.push('\n');
        output.push_str(&format!(
            "{} records, {} views, {} sales, {} revenue\n",
            self.rows.len(),
            group_thousands(self.total_views),
            group_thousands(self.total_sales),
            self.total_revenue.format_grouped(currency)
        ));

        output
    }

    /// Export the record rows to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> AnalyticsResult<()> {
        export_records_csv(&self.row_refs(), writer)
    }
}
