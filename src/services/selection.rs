//! Chart series selection
//!
//! With "All" selected the charts show one summed row per discount bin.
//! With a single category selected they show that category's records as-is:
//! there is exactly one record per bin, so nothing needs summing.

use serde::{Deserialize, Serialize};

use crate::models::{AggregatedBucket, CategoryFilter, DiscountBin, EnrichedRecord, Money};

use super::aggregation::aggregate_by_bin;
use super::filter::filter_by_category;

/// Rows feeding the revenue, conversion and sales charts
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", content = "rows", rename_all = "lowercase")]
pub enum ChartSeries<'a> {
    /// Per-bin sums over every category
    Aggregated(Vec<AggregatedBucket>),
    /// One category's records, unaggregated
    Filtered(Vec<&'a EnrichedRecord>),
}

/// The fields every chart reads, whichever series variant is active
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub discount_bin: DiscountBin,
    pub revenue: Money,
    pub sales: u64,
    pub views: u64,
    pub conversion_rate: f64,
}

impl From<&AggregatedBucket> for ChartPoint {
    fn from(bucket: &AggregatedBucket) -> Self {
        Self {
            discount_bin: bucket.discount_bin,
            revenue: bucket.revenue,
            sales: bucket.sales,
            views: bucket.views,
            conversion_rate: bucket.conversion_rate,
        }
    }
}

impl From<&EnrichedRecord> for ChartPoint {
    fn from(record: &EnrichedRecord) -> Self {
        Self {
            discount_bin: record.discount_bin,
            revenue: record.revenue,
            sales: record.sales,
            views: record.views,
            conversion_rate: record.conversion_rate,
        }
    }
}

impl ChartSeries<'_> {
    pub fn points(&self) -> Vec<ChartPoint> {
        match self {
            Self::Aggregated(buckets) => buckets.iter().map(ChartPoint::from).collect(),
            Self::Filtered(records) => records.iter().map(|r| ChartPoint::from(*r)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Aggregated(buckets) => buckets.len(),
            Self::Filtered(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_aggregated(&self) -> bool {
        matches!(self, Self::Aggregated(_))
    }

    /// Short name of the variant, as written to exports and logs
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Aggregated(_) => "aggregated",
            Self::Filtered(_) => "filtered",
        }
    }
}

/// Pick the chart rows for `filter`
pub fn select_chart_series(records: &[EnrichedRecord], filter: CategoryFilter) -> ChartSeries<'_> {
    match filter {
        CategoryFilter::All => ChartSeries::Aggregated(aggregate_by_bin(records, &DiscountBin::ALL)),
        CategoryFilter::Only(_) => ChartSeries::Filtered(filter_by_category(records, filter)),
    }
}

/// Everything one render of the analysis dashboard needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView<'a> {
    pub filter: CategoryFilter,
    /// Rows for the record table
    pub table_rows: Vec<&'a EnrichedRecord>,
    /// Rows for the charts
    pub chart_series: ChartSeries<'a>,
}

impl<'a> DashboardView<'a> {
    pub fn build(records: &'a [EnrichedRecord], filter: CategoryFilter) -> Self {
        Self {
            filter,
            table_rows: filter_by_category(records, filter),
            chart_series: select_chart_series(records, filter),
        }
    }

    pub fn total_views(&self) -> u64 {
        self.table_rows
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.views))
    }

    pub fn total_sales(&self) -> u64 {
        self.table_rows
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.sales))
    }

    pub fn total_revenue(&self) -> Money {
        self.table_rows.iter().map(|r| r.revenue).sum()
    }
}
