//! Marketplace Analytics - pricing analysis for a course marketplace
//!
//! This library provides the core functionality behind the `analytics`
//! dashboard. It enriches per-category, per-discount sales records,
//! filters them by category, aggregates them per discount bin using
//! ratio-of-sums conversion rates, and picks which rows the charts show.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data models (discount bins, categories, records, buckets)
//! - `dataset`: The embedded sample record set
//! - `services`: Enrichment, filtering, aggregation and chart selection
//! - `reports`: Terminal and CSV reports
//! - `export`: CSV, JSON and YAML dashboard exports
//! - `audit`: Append-only log of analysis runs
//! - `config`: Configuration and path management
//! - `cli`, `display`, `tui`: Presentation layers
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use marketplace_analytics::dataset::Dataset;
//! use marketplace_analytics::models::CategoryFilter;
//! use marketplace_analytics::services::AnalyticsService;
//!
//! let dataset = Dataset::sample()?;
//! let service = AnalyticsService::new(&dataset);
//! let view = service.dashboard(CategoryFilter::All);
//! assert_eq!(view.chart_series.len(), 4);
//! # Ok::<(), marketplace_analytics::AnalyticsError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod content;
pub mod dataset;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod tui;

pub use error::AnalyticsError;
