//! The sample dataset
//!
//! Twelve hand-authored bucket records, three categories by four discount
//! bins, enriched once into an immutable [`Dataset`].

use crate::error::AnalyticsResult;
use crate::models::{Category, DiscountBin, EnrichedRecord, Money, TransactionBucketRecord};
use crate::services::enrichment::enrich;

use Category::{Business, Design, TechCoding};
use DiscountBin::{Deep, FullPrice, Light, Moderate};

const fn row(
    bin: DiscountBin,
    views: u64,
    sales: u64,
    price: i64,
    category: Category,
) -> TransactionBucketRecord {
    TransactionBucketRecord::new(bin, category, views, sales, Money::from_dollars(price))
}

/// Price elasticity sample: traffic and sales per category and discount depth
pub const SAMPLE_RECORDS: [TransactionBucketRecord; 12] = [
    row(FullPrice, 1200, 60, 100, TechCoding),
    row(Light, 1500, 120, 85, TechCoding),
    row(Moderate, 2000, 350, 60, TechCoding),
    row(Deep, 3000, 900, 25, TechCoding),
    row(FullPrice, 800, 20, 100, Business),
    row(Light, 1000, 45, 85, Business),
    row(Moderate, 1400, 180, 60, Business),
    row(Deep, 2200, 500, 25, Business),
    row(FullPrice, 900, 30, 100, Design),
    row(Light, 1100, 60, 85, Design),
    row(Moderate, 1600, 200, 60, Design),
    row(Deep, 2400, 550, 25, Design),
];

/// Immutable, enriched record set
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<EnrichedRecord>,
}

impl Dataset {
    /// The built-in sample
    pub fn sample() -> AnalyticsResult<Self> {
        Self::from_records(&SAMPLE_RECORDS)
    }

    /// Enrich an explicit record set
    ///
    /// Fails with `DivisionByZero` if any record has zero views.
    pub fn from_records(records: &[TransactionBucketRecord]) -> AnalyticsResult<Self> {
        Ok(Self {
            records: enrich(records)?,
        })
    }

    pub fn records(&self) -> &[EnrichedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_sales(&self) -> u64 {
        self.records
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.sales))
    }

    pub fn total_views(&self) -> u64 {
        self.records
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.views))
    }

    pub fn total_revenue(&self) -> Money {
        self.records.iter().map(|r| r.revenue).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_shape() {
        let dataset = Dataset::sample().unwrap();
        assert_eq!(dataset.len(), 12);
        for category in Category::ALL {
            let bins: Vec<_> = dataset
                .records()
                .iter()
                .filter(|r| r.category == category)
                .map(|r| r.discount_bin)
                .collect();
            assert_eq!(bins, DiscountBin::ALL.to_vec());
        }
    }

    #[test]
    fn test_revenue_is_exact_product() {
        let dataset = Dataset::sample().unwrap();
        for record in dataset.records() {
            assert_eq!(record.revenue, record.avg_price.checked_times(record.sales).unwrap());
        }
    }

    #[test]
    fn test_sample_totals() {
        let dataset = Dataset::sample().unwrap();
        assert_eq!(dataset.total_sales(), 3015);
        assert_eq!(dataset.total_views(), 19_100);
        assert_eq!(dataset.total_revenue(), Money::from_dollars(122_675));
    }

    #[test]
    fn test_zero_views_rejected() {
        let raw = [TransactionBucketRecord::new(
            DiscountBin::FullPrice,
            Category::Design,
            0,
            0,
            Money::from_dollars(10),
        )];
        assert!(Dataset::from_records(&raw).unwrap_err().is_division_by_zero());
    }

    #[test]
    fn test_huge_revenue_rejected() {
        let raw = [TransactionBucketRecord::new(
            DiscountBin::Deep,
            Category::TechCoding,
            200_000_000_000_000_000,
            100_000_000_000_000_000,
            Money::from_dollars(100),
        )];
        assert!(Dataset::from_records(&raw).unwrap_err().is_overflow());
    }

    #[test]
    fn test_totals_saturate() {
        let raw = [
            TransactionBucketRecord::new(
                DiscountBin::FullPrice,
                Category::Design,
                u64::MAX,
                1,
                Money::from_dollars(1),
            ),
            TransactionBucketRecord::new(
                DiscountBin::Light,
                Category::Design,
                u64::MAX,
                1,
                Money::from_dollars(1),
            ),
        ];
        let dataset = Dataset::from_records(&raw).unwrap();
        assert_eq!(dataset.total_views(), u64::MAX);
        assert_eq!(dataset.total_sales(), 2);
    }
}
