//! TUI Views module
//!
//! Contains the three tabbed views (features, logic, analysis) plus the
//! header, status bar and help overlay.

pub mod analysis;
pub mod features;
pub mod header;
pub mod help;
pub mod logic;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveView, App};
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    header::render(frame, app, layout.header);

    match app.active_view {
        ActiveView::Features => features::render(frame, layout.main),
        ActiveView::Logic => logic::render(frame, layout.main),
        ActiveView::Analysis => analysis::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.show_help {
        help::render(frame, app);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditLogger;
    use crate::config::Settings;
    use crate::dataset::Dataset;
    use crate::services::AnalyticsService;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use tempfile::TempDir;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_every_view_renders() {
        let temp_dir = TempDir::new().unwrap();
        let dataset = Dataset::sample().unwrap();
        let settings = Settings::default();
        let audit = AuditLogger::new(temp_dir.path().join("audit.log"));
        let mut app = crate::tui::App::new(AnalyticsService::new(&dataset), &settings, &audit);
        let mut terminal = Terminal::new(TestBackend::new(160, 50)).unwrap();

        for view in ActiveView::ALL {
            app.switch_view(view);
            terminal.draw(|frame| render(frame, &app)).unwrap();
        }
        let text = screen_text(&terminal);
        assert!(text.contains("Data Analysis"));
        assert!(text.contains("All Categories"));

        app.toggle_help();
        terminal.draw(|frame| render(frame, &app)).unwrap();
        assert!(screen_text(&terminal).contains("Help"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let temp_dir = TempDir::new().unwrap();
        let dataset = Dataset::sample().unwrap();
        let settings = Settings::default();
        let audit = AuditLogger::new(temp_dir.path().join("audit.log"));
        let mut app = crate::tui::App::new(AnalyticsService::new(&dataset), &settings, &audit);
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();

        for view in ActiveView::ALL {
            app.switch_view(view);
            terminal.draw(|frame| render(frame, &app)).unwrap();
        }
    }
}
