//! Analysis layer for Marketplace Analytics
//!
//! Pure functions over the record set, kept in separate stages so each can be
//! tested alone:
//!
//! - `enrichment`: derive revenue and rates once per record
//! - `filter`: select records by category
//! - `aggregation`: sum per discount bin with ratio-of-sums conversion
//! - `selection`: choose aggregated or filtered rows for the charts
//! - `optimizer` / `insights`: recommendations read off the chart rows
//!
//! `AnalyticsService` ties them together for the presentation layers.

pub mod aggregation;
pub mod analytics;
pub mod enrichment;
pub mod filter;
pub mod insights;
pub mod optimizer;
pub mod selection;

pub use aggregation::{aggregate_bin, aggregate_by_bin};
pub use analytics::AnalyticsService;
pub use enrichment::{enrich, enrich_record};
pub use filter::{filter_by_category, filter_by_label};
pub use insights::{derive_insights, Insights};
pub use optimizer::{find_optimal_price, PriceRecommendation};
pub use selection::{select_chart_series, ChartPoint, ChartSeries, DashboardView};
