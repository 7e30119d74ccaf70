//! Derived insights
//!
//! Three findings read off the current chart series and the full record set:
//! which discount earns the most versus sells the most, whether the highest
//! converting discount is also the most efficient per view, and which
//! category converts best without a discount.

use serde::{Deserialize, Serialize};

use crate::models::{Category, CategoryFilter, DiscountBin, EnrichedRecord, Money};

use super::aggregation::aggregate_bin;
use super::optimizer::{bucket_efficiency, BucketEfficiency};
use super::selection::select_chart_series;

/// Revenue leader versus volume leader
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingStrategy {
    pub revenue_leader: DiscountBin,
    pub revenue: Money,
    pub volume_leader: DiscountBin,
    pub sales: u64,
}

impl PricingStrategy {
    /// The bin selling the most units is not the one earning the most
    pub fn volume_misleads(&self) -> bool {
        self.revenue_leader != self.volume_leader
    }
}

/// Highest conversion versus highest revenue per view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionTrap {
    pub conversion_leader: DiscountBin,
    pub conversion_rate: f64,
    pub rpv_leader: DiscountBin,
    pub rpv: f64,
    /// RPV of the conversion leader, to show what the chase for conversions costs
    pub conversion_leader_rpv: f64,
}

impl ConversionTrap {
    pub fn detected(&self) -> bool {
        self.conversion_leader != self.rpv_leader
    }
}

/// Full-price conversion of each category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySensitivity {
    pub baseline: DiscountBin,
    /// Category converting best at the baseline price
    pub least_sensitive: Category,
    pub least_sensitive_rate: f64,
    /// Category converting worst at the baseline price
    pub most_sensitive: Category,
    pub most_sensitive_rate: f64,
    pub rates: Vec<(Category, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub strategy: PricingStrategy,
    pub trap: ConversionTrap,
    /// `None` when no category has full-price traffic
    pub sensitivity: Option<CategorySensitivity>,
}

/// First element with the greatest key; earlier elements win ties
fn leader<T, K: PartialOrd>(items: &[T], key: impl Fn(&T) -> K) -> Option<&T> {
    items.iter().reduce(|best, item| if key(item) > key(best) { item } else { best })
}

fn pricing_strategy(evaluated: &[BucketEfficiency]) -> Option<PricingStrategy> {
    let by_revenue = leader(evaluated, |b| b.revenue)?;
    let by_volume = leader(evaluated, |b| b.sales)?;
    Some(PricingStrategy {
        revenue_leader: by_revenue.discount_bin,
        revenue: by_revenue.revenue,
        volume_leader: by_volume.discount_bin,
        sales: by_volume.sales,
    })
}

fn conversion_trap(evaluated: &[BucketEfficiency]) -> Option<ConversionTrap> {
    let by_conversion = leader(evaluated, |b| b.conversion_rate)?;
    let by_rpv = leader(evaluated, |b| b.rpv)?;
    Some(ConversionTrap {
        conversion_leader: by_conversion.discount_bin,
        conversion_rate: by_conversion.conversion_rate,
        rpv_leader: by_rpv.discount_bin,
        rpv: by_rpv.rpv,
        conversion_leader_rpv: by_conversion.rpv,
    })
}

/// Compare categories by conversion at `baseline`, using ratio of sums
pub fn category_sensitivity(
    records: &[EnrichedRecord],
    baseline: DiscountBin,
) -> Option<CategorySensitivity> {
    let rates: Vec<(Category, f64)> = Category::ALL
        .into_iter()
        .filter_map(|category| {
            let bucket = aggregate_bin(
                baseline,
                records.iter().filter(|r| r.category == category),
            );
            (!bucket.is_empty()).then_some((category, bucket.conversion_rate))
        })
        .collect();

    let (least, least_rate) = *leader(&rates, |(_, rate)| *rate)?;
    let (most, most_rate) = *leader(&rates, |(_, rate)| -*rate)?;

    Some(CategorySensitivity {
        baseline,
        least_sensitive: least,
        least_sensitive_rate: least_rate,
        most_sensitive: most,
        most_sensitive_rate: most_rate,
        rates,
    })
}

/// Derive the insights panel for a filter
///
/// Strategy and trap follow the filtered chart series; category sensitivity
/// always compares every category. Returns `None` when the series is empty.
pub fn derive_insights(records: &[EnrichedRecord], filter: CategoryFilter) -> Option<Insights> {
    let points = select_chart_series(records, filter).points();
    let evaluated = bucket_efficiency(&points);

    Some(Insights {
        strategy: pricing_strategy(&evaluated)?,
        trap: conversion_trap(&evaluated)?,
        sensitivity: category_sensitivity(records, DiscountBin::FullPrice),
    })
}
