//! Analytics service
//!
//! Front door over a [`Dataset`] for the CLI, TUI and exports. Every call
//! recomputes from the immutable records; nothing is cached between filter
//! selections.

use crate::dataset::Dataset;
use crate::error::AnalyticsResult;
use crate::models::{CategoryFilter, EnrichedRecord};

use super::insights::{derive_insights, Insights};
use super::optimizer::{find_optimal_price, PriceRecommendation};
use super::selection::{select_chart_series, ChartSeries, DashboardView};

/// Service for filter-driven analysis of a dataset
pub struct AnalyticsService<'a> {
    dataset: &'a Dataset,
}

impl<'a> AnalyticsService<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Table and chart rows for one filter selection
    pub fn dashboard(&self, filter: CategoryFilter) -> DashboardView<'a> {
        DashboardView::build(self.dataset.records(), filter)
    }

    /// Dashboard for a selection given as text, e.g. from a command-line flag
    pub fn dashboard_for(&self, selection: &str) -> AnalyticsResult<DashboardView<'a>> {
        Ok(self.dashboard(selection.parse()?))
    }

    pub fn table_rows(&self, filter: CategoryFilter) -> Vec<&'a EnrichedRecord> {
        super::filter::filter_by_category(self.dataset.records(), filter)
    }

    pub fn chart_series(&self, filter: CategoryFilter) -> ChartSeries<'a> {
        select_chart_series(self.dataset.records(), filter)
    }

    /// Highest-revenue discount within the filter's chart series
    pub fn recommendation(&self, filter: CategoryFilter) -> Option<PriceRecommendation> {
        find_optimal_price(&self.chart_series(filter).points())
    }

    pub fn insights(&self, filter: CategoryFilter) -> Option<Insights> {
        derive_insights(self.dataset.records(), filter)
    }
}
