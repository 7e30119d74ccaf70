//! Configuration module for Marketplace Analytics
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::AnalyticsPaths;
pub use settings::{Settings, StartView};
