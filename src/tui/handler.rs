//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveView, App};
use super::event::Event;
use crate::models::CategoryFilter;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Any key closes the help overlay
    if app.show_help {
        app.toggle_help();
        return Ok(());
    }

    // Global keys (work everywhere)
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') => {
            app.toggle_help();
            return Ok(());
        }
        KeyCode::Char('1') => {
            app.switch_view(ActiveView::Features);
            return Ok(());
        }
        KeyCode::Char('2') => {
            app.switch_view(ActiveView::Logic);
            return Ok(());
        }
        KeyCode::Char('3') => {
            app.switch_view(ActiveView::Analysis);
            return Ok(());
        }
        KeyCode::Tab => {
            app.switch_view(app.active_view.next());
            return Ok(());
        }
        KeyCode::BackTab => {
            app.switch_view(app.active_view.prev());
            return Ok(());
        }
        _ => {}
    }

    if app.active_view == ActiveView::Analysis {
        handle_analysis_key(app, key);
    }
    Ok(())
}

/// Keys for the analysis view: category selector and table navigation
fn handle_analysis_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('c') => app.next_filter(),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('C') => app.prev_filter(),
        KeyCode::Char('a') => app.select_filter(CategoryFilter::All),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditLogger;
    use crate::config::Settings;
    use crate::dataset::Dataset;
    use crate::models::Category;
    use crate::services::AnalyticsService;
    use tempfile::TempDir;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    #[test]
    fn test_tab_navigation() {
        let temp_dir = TempDir::new().unwrap();
        let dataset = Dataset::sample().unwrap();
        let settings = Settings::default();
        let audit = AuditLogger::new(temp_dir.path().join("audit.log"));
        let mut app = App::new(AnalyticsService::new(&dataset), &settings, &audit);

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.active_view, ActiveView::Analysis);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_view, ActiveView::Features);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.active_view, ActiveView::Analysis);
    }

    #[test]
    fn test_category_keys_only_in_analysis() {
        let temp_dir = TempDir::new().unwrap();
        let dataset = Dataset::sample().unwrap();
        let settings = Settings::default();
        let audit = AuditLogger::new(temp_dir.path().join("audit.log"));
        let mut app = App::new(AnalyticsService::new(&dataset), &settings, &audit);

        press(&mut app, KeyCode::Right);
        assert_eq!(app.filter, CategoryFilter::All);

        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.filter, CategoryFilter::Only(Category::Business));
        assert!(!app.dashboard.chart_series.is_aggregated());

        press(&mut app, KeyCode::Left);
        assert_eq!(app.filter, CategoryFilter::Only(Category::TechCoding));
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.filter, CategoryFilter::All);
        assert!(app.dashboard.chart_series.is_aggregated());
    }

    #[test]
    fn test_help_swallows_next_key() {
        let temp_dir = TempDir::new().unwrap();
        let dataset = Dataset::sample().unwrap();
        let settings = Settings::default();
        let audit = AuditLogger::new(temp_dir.path().join("audit.log"));
        let mut app = App::new(AnalyticsService::new(&dataset), &settings, &audit);

        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.show_help);
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
