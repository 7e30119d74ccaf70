//! Record enrichment
//!
//! Derives revenue, conversion rate and revenue per pageview for each base
//! record. Runs once when a dataset is built.

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::models::{EnrichedRecord, Money, TransactionBucketRecord};

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// `numerator / denominator * 100`, or `None` when the denominator is zero
pub fn ratio_percent(numerator: u64, denominator: u64) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64 * 100.0)
    }
}

/// Money per unit in currency units, or `None` when there are no units
pub fn money_per(amount: Money, units: u64) -> Option<f64> {
    if units == 0 {
        None
    } else {
        Some(amount.as_f64() / units as f64)
    }
}

/// Enrich a single record
pub fn enrich_record(record: &TransactionBucketRecord) -> AnalyticsResult<EnrichedRecord> {
    let revenue = record.avg_price.checked_times(record.sales).ok_or_else(|| {
        AnalyticsError::overflow(format!(
            "{} / {} revenue ({} sales at {})",
            record.category, record.discount_bin, record.sales, record.avg_price
        ))
    })?;

    let zero_views = || {
        AnalyticsError::division_by_zero(format!(
            "{} / {} has zero views",
            record.category, record.discount_bin
        ))
    };
    let conversion = ratio_percent(record.sales, record.views).ok_or_else(zero_views)?;
    let rpp = money_per(revenue, record.views).ok_or_else(zero_views)?;

    Ok(EnrichedRecord {
        discount_bin: record.discount_bin,
        category: record.category,
        views: record.views,
        sales: record.sales,
        avg_price: record.avg_price,
        revenue,
        conversion_rate: round_to(conversion, 1),
        rpp: round_to(rpp, 2),
    })
}

/// Enrich every record, preserving order
///
/// Fails on the first record with zero views or a revenue that overflows.
pub fn enrich(records: &[TransactionBucketRecord]) -> AnalyticsResult<Vec<EnrichedRecord>> {
    records.iter().map(enrich_record).collect()
}
