//! Terminal User Interface module
//!
//! This module provides the interactive dashboard using ratatui: tabs for the
//! proposed features, the pricing logic walkthrough and the data analysis.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;

pub use app::App;
pub use terminal::run_tui;
