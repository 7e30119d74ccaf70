//! Per-bin aggregates

use serde::{Deserialize, Serialize};

use super::{DiscountBin, Money};

/// Sales and revenue of one discount bin summed across its member records
///
/// The conversion rate is recomputed from the summed sales and views; it is
/// never an average of the members' own rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedBucket {
    pub discount_bin: DiscountBin,
    pub revenue: Money,
    pub sales: u64,
    pub views: u64,
    /// `sum(sales) / sum(views) * 100`, one decimal; zero for an empty bin
    pub conversion_rate: f64,
}

impl AggregatedBucket {
    /// A bin with no member records
    pub fn empty(discount_bin: DiscountBin) -> Self {
        Self {
            discount_bin,
            revenue: Money::zero(),
            sales: 0,
            views: 0,
            conversion_rate: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.views == 0 && self.sales == 0
    }
}
