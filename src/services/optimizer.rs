//! Optimal discount search
//!
//! The target is the discount bin with the highest total revenue. Sales
//! volume alone always favours the deepest discount, and conversion rate
//! climbs with it, so neither is used to pick the winner. Revenue per view
//! is reported alongside as an efficiency measure.

use serde::{Deserialize, Serialize};

use crate::models::{DiscountBin, Money};

use super::enrichment::money_per;
use super::selection::ChartPoint;

/// Efficiency figures for one bin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketEfficiency {
    pub discount_bin: DiscountBin,
    pub revenue: Money,
    pub sales: u64,
    pub views: u64,
    pub conversion_rate: f64,
    /// Revenue per view; zero for a bin without views
    pub rpv: f64,
}

impl From<&ChartPoint> for BucketEfficiency {
    fn from(point: &ChartPoint) -> Self {
        Self {
            discount_bin: point.discount_bin,
            revenue: point.revenue,
            sales: point.sales,
            views: point.views,
            conversion_rate: point.conversion_rate,
            rpv: money_per(point.revenue, point.views).unwrap_or(0.0),
        }
    }
}

/// The recommended discount and what it is projected to earn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecommendation {
    pub recommendation: DiscountBin,
    pub projected_revenue: Money,
    pub rpv: f64,
    pub conversion_rate: f64,
    /// Every bin that was considered, in input order
    pub evaluated: Vec<BucketEfficiency>,
}

/// Efficiency figures for each point, in order
pub fn bucket_efficiency(points: &[ChartPoint]) -> Vec<BucketEfficiency> {
    points.iter().map(BucketEfficiency::from).collect()
}

/// Recommend the bin with the highest total revenue
///
/// Ties go to the shallower discount. Returns `None` for an empty series.
pub fn find_optimal_price(points: &[ChartPoint]) -> Option<PriceRecommendation> {
    let evaluated = bucket_efficiency(points);

    let best = evaluated
        .iter()
        .reduce(|best, candidate| {
            if candidate.revenue > best.revenue {
                candidate
            } else {
                best
            }
        })?
        .clone();

    Some(PriceRecommendation {
        recommendation: best.discount_bin,
        projected_revenue: best.revenue,
        rpv: best.rpv,
        conversion_rate: best.conversion_rate,
        evaluated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::models::{Category, CategoryFilter};
    use crate::services::selection::select_chart_series;

    fn point(bin: DiscountBin, revenue: i64, sales: u64, views: u64) -> ChartPoint {
        ChartPoint {
            discount_bin: bin,
            revenue: Money::from_dollars(revenue),
            sales,
            views,
            conversion_rate: 0.0,
        }
    }

    #[test]
    fn test_picks_revenue_not_volume() {
        let points = vec![
            point(DiscountBin::FullPrice, 1000, 10, 100),
            point(DiscountBin::Moderate, 5000, 100, 500),
            point(DiscountBin::Deep, 4000, 400, 600),
        ];
        let rec = find_optimal_price(&points).unwrap();
        assert_eq!(rec.recommendation, DiscountBin::Moderate);
        assert_eq!(rec.projected_revenue, Money::from_dollars(5000));
        assert_eq!(rec.rpv, 10.0);
        assert_eq!(rec.evaluated.len(), 3);
    }

    #[test]
    fn test_tie_prefers_shallower_discount() {
        let points = vec![
            point(DiscountBin::Light, 3000, 10, 100),
            point(DiscountBin::Deep, 3000, 50, 100),
        ];
        let rec = find_optimal_price(&points).unwrap();
        assert_eq!(rec.recommendation, DiscountBin::Light);
    }

    #[test]
    fn test_empty_series() {
        assert!(find_optimal_price(&[]).is_none());
    }

    #[test]
    fn test_zero_view_bin_has_zero_rpv() {
        let eff = bucket_efficiency(&[point(DiscountBin::Deep, 0, 0, 0)]);
        assert_eq!(eff[0].rpv, 0.0);
    }

    #[test]
    fn test_sample_recommendations() {
        let dataset = Dataset::sample().unwrap();

        let all = select_chart_series(dataset.records(), CategoryFilter::All).points();
        let rec = find_optimal_price(&all).unwrap();
        assert_eq!(rec.recommendation, DiscountBin::Deep);
        assert_eq!(rec.projected_revenue, Money::from_dollars(48_750));

        let business =
            select_chart_series(dataset.records(), CategoryFilter::Only(Category::Business))
                .points();
        let rec = find_optimal_price(&business).unwrap();
        // 500 * 25 = 12,500 beats 180 * 60 = 10,800
        assert_eq!(rec.recommendation, DiscountBin::Deep);
        assert_eq!(rec.projected_revenue, Money::from_dollars(12_500));
    }
}
