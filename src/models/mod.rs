//! Core data models for Marketplace Analytics
//!
//! This module contains the data structures of the pricing analysis: discount
//! bins, categories and the category filter, bucket records and aggregates.

pub mod bucket;
pub mod category;
pub mod discount_bin;
pub mod money;
pub mod record;

pub use bucket::AggregatedBucket;
pub use category::{Category, CategoryFilter};
pub use discount_bin::DiscountBin;
pub use money::{group_thousands, Money};
pub use record::{EnrichedRecord, TransactionBucketRecord};
