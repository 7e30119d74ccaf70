//! Proposal catalogue
//!
//! Static copy for the "features" and "logic" views: the proposed analytical
//! engines and the walkthrough of the dynamic pricing algorithm.

/// A proposed analytical engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProposedFeature {
    pub title: &'static str,
    pub description: &'static str,
    pub metrics: [&'static str; 3],
}

pub const OBJECTIVE: &str = "Propose high-impact analytical engines for a marketplace \
platform that optimize revenue, user retention, and content quality.";

pub const FEATURES: [ProposedFeature; 5] = [
    ProposedFeature {
        title: "Dynamic Pricing & Elasticity Engine",
        description: "Analyzes historical sales against discount depth to find the \
            sweet spot between volume and margin.",
        metrics: ["Price Elasticity", "Rev. Per View", "Conversion Rate"],
    },
    ProposedFeature {
        title: "Churn Prediction Model",
        description: "Identifies users at risk of leaving based on login frequency, \
            course completion stalls, and support tickets.",
        metrics: ["Days Inactive", "Video Drop-off %", "NPS Score"],
    },
    ProposedFeature {
        title: "Search Gap Analysis",
        description: "Detects high-volume search queries that yield zero or low-rated \
            results to guide content acquisition.",
        metrics: ["Zero-result Queries", "Search Exit Rate", "Keyword Value"],
    },
    ProposedFeature {
        title: "Course Stickiness Index",
        description: "A composite score of how engaging a course is, based on \
            binge-watching behavior and assignment completions.",
        metrics: ["Completion Rate", "Session Duration", "Return Rate"],
    },
    ProposedFeature {
        title: "Instructor Performance Heatmap",
        description: "Tracks instructor responsiveness and rating trends over time to \
            automate quality assurance flags.",
        metrics: ["Response Time", "Rating Trend", "Refund Rate"],
    },
];

/// One step of the pricing logic flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicStep {
    pub name: &'static str,
    pub detail: &'static str,
}

pub const LOGIC_GOAL: &str = "Find the optimal discount rate. Maximum sales happen at the \
deepest discount; the target is maximum revenue.";

pub const LOGIC_FLOW: [LogicStep; 4] = [
    LogicStep {
        name: "Data Collection",
        detail: "Group historical transactions by category and discount bucket \
            (0%, 10-20%, 30-50%, 60-80%).",
    },
    LogicStep {
        name: "Metrics Calculation",
        detail: "For each bucket, compute total revenue, conversion rate and revenue \
            per view (RPV) from summed sales and views.",
    },
    LogicStep {
        name: "Elasticity Check",
        detail: "Compare RPV across buckets. If a deeper discount lifts volume enough \
            to offset the lower price, RPV rises.",
    },
    LogicStep {
        name: "Optimization",
        detail: "Pick the bucket with the highest total revenue, not the highest \
            conversion rate.",
    },
];

/// Pseudo-code of the optimisation, as shown beside the logic flow
pub const ALGORITHM_LISTING: &str = "\
find_optimal_price(records):
  buckets = group records by discount bin

  for each bucket:
    views   = sum of views
    sales   = sum of sales
    revenue = sum of sales * avg_price
    conversion = sales / views * 100
    rpv        = revenue / views

  optimal = bucket with max revenue
  return (optimal.bin, optimal.revenue)
";
