//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Everything derived from the category selection is rebuilt in
//! [`App::select_filter`]; nothing carries over between selections.

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{Settings, StartView};
use crate::models::CategoryFilter;
use crate::reports::InsightsReport;
use crate::services::{AnalyticsService, DashboardView, PriceRecommendation};

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Features,
    Logic,
    Analysis,
}

impl ActiveView {
    /// Tabs in display order
    pub const ALL: [ActiveView; 3] = [Self::Features, Self::Logic, Self::Analysis];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Features => "Proposed Features",
            Self::Logic => "Pricing Logic",
            Self::Analysis => "Data Analysis",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Features => 0,
            Self::Logic => 1,
            Self::Analysis => 2,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl From<StartView> for ActiveView {
    fn from(view: StartView) -> Self {
        match view {
            StartView::Features => Self::Features,
            StartView::Logic => Self::Logic,
            StartView::Analysis => Self::Analysis,
        }
    }
}

/// Main application state
pub struct App<'a> {
    /// Analysis over the loaded dataset
    pub service: AnalyticsService<'a>,

    /// Application settings
    pub settings: &'a Settings,

    /// Log that category selections are appended to
    pub audit: &'a AuditLogger,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Whether the help overlay is shown
    pub show_help: bool,

    /// Current category selection
    pub filter: CategoryFilter,

    /// Table and chart rows for `filter`
    pub dashboard: DashboardView<'a>,

    pub recommendation: Option<PriceRecommendation>,

    pub insights: InsightsReport,

    /// Highlighted row in the record table
    pub selected_row: usize,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance showing the configured start view and filter
    pub fn new(service: AnalyticsService<'a>, settings: &'a Settings, audit: &'a AuditLogger) -> Self {
        let filter = settings.default_filter;

        Self {
            dashboard: service.dashboard(filter),
            recommendation: service.recommendation(filter),
            insights: InsightsReport::generate(&service, filter),
            service,
            settings,
            audit,
            should_quit: false,
            active_view: settings.start_view.into(),
            show_help: false,
            filter,
            selected_row: 0,
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a different view
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        self.clear_status();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Change the category selection and rebuild everything derived from it
    pub fn select_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.dashboard = self.service.dashboard(filter);
        self.recommendation = self.service.recommendation(filter);
        self.insights = InsightsReport::generate(&self.service, filter);
        self.selected_row = 0;

        if self.settings.audit_enabled {
            if let Err(e) = self.audit.log(&AuditEntry::select(&self.dashboard)) {
                self.set_status(format!("Audit log error: {}", e));
                return;
            }
        }
        self.set_status(format!("Showing {}", filter.selector_label()));
    }

    pub fn next_filter(&mut self) {
        self.select_filter(self.filter.next());
    }

    pub fn prev_filter(&mut self) {
        self.select_filter(self.filter.prev());
    }

    /// Move selection up in the record table
    pub fn move_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    /// Move selection down in the record table
    pub fn move_down(&mut self) {
        let max = self.dashboard.table_rows.len();
        if self.selected_row < max.saturating_sub(1) {
            self.selected_row += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::models::Category;
    use tempfile::TempDir;

    #[test]
    fn test_view_cycling() {
        assert_eq!(ActiveView::Features.next(), ActiveView::Logic);
        assert_eq!(ActiveView::Analysis.next(), ActiveView::Features);
        assert_eq!(ActiveView::Features.prev(), ActiveView::Analysis);
        assert_eq!(ActiveView::from(StartView::Analysis), ActiveView::Analysis);
    }

    #[test]
    fn test_new_uses_settings() {
        let temp_dir = TempDir::new().unwrap();
        let dataset = Dataset::sample().unwrap();
        let settings = Settings {
            default_filter: CategoryFilter::Only(Category::Design),
            start_view: StartView::Analysis,
            ..Settings::default()
        };
        let audit = AuditLogger::new(temp_dir.path().join("audit.log"));
        let app = App::new(AnalyticsService::new(&dataset), &settings, &audit);

        assert_eq!(app.active_view, ActiveView::Analysis);
        assert_eq!(app.dashboard.filter, CategoryFilter::Only(Category::Design));
        assert_eq!(app.dashboard.table_rows.len(), 4);
        assert!(!app.dashboard.chart_series.is_aggregated());
    }

    #[test]
    fn test_select_filter_rebuilds_and_logs() {
        let temp_dir = TempDir::new().unwrap();
        let dataset = Dataset::sample().unwrap();
        let settings = Settings::default();
        let audit = AuditLogger::new(temp_dir.path().join("audit.log"));
        let mut app = App::new(AnalyticsService::new(&dataset), &settings, &audit);
        let initial = app.dashboard.clone();

        app.move_down();
        app.select_filter(CategoryFilter::Only(Category::Business));
        assert_eq!(app.selected_row, 0);
        assert_eq!(app.dashboard.table_rows.len(), 4);
        assert_eq!(app.insights.filter, CategoryFilter::Only(Category::Business));
        assert_eq!(app.status_message.as_deref(), Some("Showing Business"));

        app.select_filter(CategoryFilter::All);
        assert_eq!(app.dashboard, initial);
        assert_eq!(audit.entry_count().unwrap(), 2);
    }

    #[test]
    fn test_audit_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let dataset = Dataset::sample().unwrap();
        let settings = Settings {
            audit_enabled: false,
            ..Settings::default()
        };
        let audit = AuditLogger::new(temp_dir.path().join("audit.log"));
        let mut app = App::new(AnalyticsService::new(&dataset), &settings, &audit);

        app.next_filter();
        assert_eq!(app.filter, CategoryFilter::Only(Category::TechCoding));
        assert_eq!(audit.entry_count().unwrap(), 0);
    }

    #[test]
    fn test_row_selection_is_bounded() {
        let temp_dir = TempDir::new().unwrap();
        let dataset = Dataset::sample().unwrap();
        let settings = Settings::default();
        let audit = AuditLogger::new(temp_dir.path().join("audit.log"));
        let mut app = App::new(AnalyticsService::new(&dataset), &settings, &audit);

        app.move_up();
        assert_eq!(app.selected_row, 0);
        for _ in 0..20 {
            app.move_down();
        }
        assert_eq!(app.selected_row, 11);
    }
}
