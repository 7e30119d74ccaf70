//! Table rendering for records and chart rows

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{group_thousands, EnrichedRecord};
use crate::services::ChartPoint;

use super::format::format_rate;

#[derive(Tabled)]
struct RecordLine {
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Discount Bin")]
    discount_bin: &'static str,
    #[tabled(rename = "Avg Price")]
    avg_price: String,
    #[tabled(rename = "Views")]
    views: String,
    #[tabled(rename = "Sales")]
    sales: String,
    #[tabled(rename = "Revenue")]
    revenue: String,
    #[tabled(rename = "Conv. Rate")]
    conversion_rate: String,
}

#[derive(Tabled)]
struct ChartLine {
    #[tabled(rename = "Discount Bin")]
    discount_bin: &'static str,
    #[tabled(rename = "Views")]
    views: String,
    #[tabled(rename = "Sales")]
    sales: String,
    #[tabled(rename = "Revenue")]
    revenue: String,
    #[tabled(rename = "Conv. Rate")]
    conversion_rate: String,
}

/// Format the record table (the "sample data set preview")
pub fn format_record_table(rows: &[&EnrichedRecord], currency: &str) -> String {
    if rows.is_empty() {
        return "No records match this category.".to_string();
    }

    let lines = rows.iter().map(|r| RecordLine {
        category: r.category.label(),
        discount_bin: r.discount_bin.label(),
        avg_price: r.avg_price.format_grouped(currency),
        views: group_thousands(r.views),
        sales: group_thousands(r.sales),
        revenue: r.revenue.format_grouped(currency),
        conversion_rate: format_rate(r.conversion_rate),
    });

    Table::new(lines)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(2..)).with(Alignment::right()))
        .to_string()
}

/// Format chart rows as a table, one line per discount bin
pub fn format_chart_table(points: &[ChartPoint], currency: &str) -> String {
    let lines = points.iter().map(|p| ChartLine {
        discount_bin: p.discount_bin.label(),
        views: group_thousands(p.views),
        sales: group_thousands(p.sales),
        revenue: p.revenue.format_grouped(currency),
        conversion_rate: format_rate(p.conversion_rate),
    });

    Table::new(lines)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::models::{Category, CategoryFilter};
    use crate::services::{filter_by_category, select_chart_series};

    #[test]
    fn test_record_table() {
        let dataset = Dataset::sample().unwrap();
        let rows = filter_by_category(dataset.records(), CategoryFilter::Only(Category::Business));
        let table = format_record_table(&rows, "$");

        assert!(table.contains("Discount Bin"));
        assert!(table.contains("Business"));
        assert!(table.contains("$10,800"));
        assert!(table.contains("12.9%"));
        assert!(!table.contains("Design"));
    }

    #[test]
    fn test_empty_record_table() {
        assert_eq!(format_record_table(&[], "$"), "No records match this category.");
    }

    #[test]
    fn test_chart_table() {
        let dataset = Dataset::sample().unwrap();
        let points = select_chart_series(dataset.records(), CategoryFilter::All).points();
        let table = format_chart_table(&points, "$");

        assert!(table.contains("60-80% Off"));
        assert!(table.contains("1,950"));
        assert!(table.contains("$48,750"));
    }
}
