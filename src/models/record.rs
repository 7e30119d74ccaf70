//! Transaction bucket records
//!
//! A bucket record summarises all transactions of one category that sold at
//! one discount depth. Enriched records carry the derived revenue and rates,
//! computed once when the dataset is loaded.

use serde::{Deserialize, Serialize};

use super::{Category, DiscountBin, Money};

/// One base sample row: a category's traffic and sales within a discount bin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionBucketRecord {
    pub discount_bin: DiscountBin,
    pub category: Category,
    /// Pageviews
    pub views: u64,
    /// Units sold; expected to be at most `views`, not enforced
    pub sales: u64,
    /// Average unit price paid
    pub avg_price: Money,
}

impl TransactionBucketRecord {
    pub const fn new(
        discount_bin: DiscountBin,
        category: Category,
        views: u64,
        sales: u64,
        avg_price: Money,
    ) -> Self {
        Self {
            discount_bin,
            category,
            views,
            sales,
            avg_price,
        }
    }
}

/// A bucket record with its derived metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    pub discount_bin: DiscountBin,
    pub category: Category,
    pub views: u64,
    pub sales: u64,
    pub avg_price: Money,

    /// `sales * avg_price`, exact
    pub revenue: Money,

    /// Sales per hundred views, rounded to one decimal
    pub conversion_rate: f64,

    /// Revenue per pageview in currency units, rounded to two decimals
    pub rpp: f64,
}

impl EnrichedRecord {
    /// The base fields this record was derived from
    pub fn base(&self) -> TransactionBucketRecord {
        TransactionBucketRecord::new(
            self.discount_bin,
            self.category,
            self.views,
            self.sales,
            self.avg_price,
        )
    }
}
