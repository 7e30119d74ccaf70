//! Reports module for Marketplace Analytics
//!
//! Provides the terminal and CSV reports behind `analytics report`: the
//! per-bin pricing breakdown, the record table and the insights summary.

pub mod insights;
pub mod pricing;
pub mod records;

pub use insights::InsightsReport;
pub use pricing::PricingReport;
pub use records::RecordTableReport;
