//! Bucket aggregation
//!
//! Sums records per discount bin. The conversion rate of a bin is computed
//! from the summed sales and views (ratio of sums), so bins whose members
//! have very different traffic are weighted correctly.

use crate::models::{AggregatedBucket, DiscountBin, EnrichedRecord, Money};

use super::enrichment::{ratio_percent, round_to};

/// Aggregate the records of a single bin
pub fn aggregate_bin<'a, I>(discount_bin: DiscountBin, records: I) -> AggregatedBucket
where
    I: IntoIterator<Item = &'a EnrichedRecord>,
{
    let mut bucket = AggregatedBucket::empty(discount_bin);
    let mut revenue = Money::zero();

    for record in records.into_iter().filter(|r| r.discount_bin == discount_bin) {
        bucket.sales = bucket.sales.saturating_add(record.sales);
        bucket.views = bucket.views.saturating_add(record.views);
        revenue += record.revenue;
    }
    bucket.revenue = revenue;

    // An empty bin has no views; its rate is defined as zero
    bucket.conversion_rate = ratio_percent(bucket.sales, bucket.views)
        .map(|rate| round_to(rate, 1))
        .unwrap_or(0.0);

    bucket
}

/// One bucket per bin in `bins`, in that order
///
/// Bins with no matching records are still emitted, with zero totals.
pub fn aggregate_by_bin(records: &[EnrichedRecord], bins: &[DiscountBin]) -> Vec<AggregatedBucket> {
    bins.iter().map(|bin| aggregate_bin(*bin, records)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::models::{Category, TransactionBucketRecord};
    use crate::services::enrichment::enrich;

    fn synthetic(rows: &[(DiscountBin, Category, u64, u64, i64)]) -> Vec<EnrichedRecord> {
        let raw: Vec<_> = rows
            .iter()
            .map(|(bin, cat, views, sales, price)| {
                TransactionBucketRecord::new(*bin, *cat, *views, *sales, Money::from_dollars(*price))
            })
            .collect();
        enrich(&raw).unwrap()
    }

    #[test]
    fn test_ratio_of_sums_not_mean_of_ratios() {
        let records = synthetic(&[
            (DiscountBin::Light, Category::TechCoding, 100, 50, 10),
            (DiscountBin::Light, Category::Design, 1000, 50, 10),
        ]);
        // Member rates are 50% and 5%; their mean would be 27.5
        let bucket = aggregate_bin(DiscountBin::Light, &records);
        assert_eq!(bucket.sales, 100);
        assert_eq!(bucket.views, 1100);
        assert_eq!(bucket.conversion_rate, 9.1);
        assert_ne!(bucket.conversion_rate, 27.5);
    }

    #[test]
    fn test_empty_bin_is_zero() {
        let records = synthetic(&[(DiscountBin::FullPrice, Category::Business, 10, 1, 100)]);
        let buckets = aggregate_by_bin(&records, &DiscountBin::ALL);
        assert_eq!(buckets.len(), 4);
        let deep = &buckets[3];
        assert_eq!(deep.discount_bin, DiscountBin::Deep);
        assert!(deep.is_empty());
        assert_eq!(deep.revenue, Money::zero());
        assert_eq!(deep.conversion_rate, 0.0);
    }

    #[test]
    fn test_no_records_at_all() {
        let buckets = aggregate_by_bin(&[], &DiscountBin::ALL);
        assert_eq!(buckets.len(), 4);
        assert!(buckets.iter().all(AggregatedBucket::is_empty));
    }

    #[test]
    fn test_huge_bins_saturate() {
        let records = synthetic(&[
            (DiscountBin::Deep, Category::TechCoding, u64::MAX, u64::MAX / 2, 0),
            (DiscountBin::Deep, Category::Design, u64::MAX, u64::MAX / 2, 0),
        ]);
        let bucket = aggregate_bin(DiscountBin::Deep, &records);
        assert_eq!(bucket.views, u64::MAX);
        assert_eq!(bucket.sales, u64::MAX - 1);
        assert_eq!(bucket.revenue, Money::zero());
    }

    #[test]
    fn test_canonical_order_not_magnitude() {
        let dataset = Dataset::sample().unwrap();
        let buckets = aggregate_by_bin(dataset.records(), &DiscountBin::ALL);
        let bins: Vec<_> = buckets.iter().map(|b| b.discount_bin).collect();
        assert_eq!(bins, DiscountBin::ALL.to_vec());
    }

    #[test]
    fn test_sales_are_conserved() {
        let dataset = Dataset::sample().unwrap();
        let buckets = aggregate_by_bin(dataset.records(), &DiscountBin::ALL);
        let bucket_sales: u64 = buckets.iter().map(|b| b.sales).sum();
        let bucket_revenue: Money = buckets.iter().map(|b| b.revenue).sum();
        assert_eq!(bucket_sales, dataset.total_sales());
        assert_eq!(bucket_revenue, dataset.total_revenue());
    }

    #[test]
    fn test_sample_deep_discount_bucket() {
        let dataset = Dataset::sample().unwrap();
        let buckets = aggregate_by_bin(dataset.records(), &DiscountBin::ALL);
        let deep = &buckets[3];
        assert_eq!(deep.discount_bin, DiscountBin::Deep);
        assert_eq!(deep.sales, 900 + 500 + 550);
        assert_eq!(deep.revenue, Money::from_dollars(48_750));
        // 1950 / 7600
        assert_eq!(deep.conversion_rate, 25.7);
    }
}
