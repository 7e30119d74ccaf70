//! Catalogue display formatting
//!
//! Text renditions of the proposed features and the pricing logic flow.

use crate::content::{ALGORITHM_LISTING, FEATURES, LOGIC_FLOW, LOGIC_GOAL, OBJECTIVE};

use super::format::{double_separator, separator, wrap};

/// Format the proposed features overview
pub fn format_features() -> String {
    let mut output = String::new();

    output.push_str("Proposed Analytical Features\n");
    output.push_str(&double_separator(80));
    output.push('\n');
    for line in wrap(OBJECTIVE, 78) {
        output.push_str(&format!("{}\n", line));
    }

    for (i, feature) in FEATURES.iter().enumerate() {
        output.push_str(&format!("\n{}. {}\n", i + 1, feature.title));
        for line in wrap(feature.description, 74) {
            output.push_str(&format!("   {}\n", line));
        }
        output.push_str(&format!("   Key metrics: {}\n", feature.metrics.join(" | ")));
    }

    output
}

/// Format the dynamic pricing walkthrough with the algorithm listing
pub fn format_logic() -> String {
    let mut output = String::new();

    output.push_str("Dynamic Pricing Logic\n");
    output.push_str(&double_separator(80));
    output.push('\n');
    for line in wrap(LOGIC_GOAL, 78) {
        output.push_str(&format!("{}\n", line));
    }
    output.push('\n');

    for (i, step) in LOGIC_FLOW.iter().enumerate() {
        output.push_str(&format!("[{}] {}\n", i + 1, step.name));
        for line in wrap(step.detail, 74) {
            output.push_str(&format!("    {}\n", line));
        }
        if i + 1 < LOGIC_FLOW.len() {
            output.push_str("     ↓\n");
        }
    }

    output.push('\n');
    output.push_str(&separator(80));
    output.push('\n');
    output.push_str(ALGORITHM_LISTING);

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_features() {
        let text = format_features();
        assert!(text.contains("1. Dynamic Pricing & Elasticity Engine"));
        assert!(text.contains("5. Instructor Performance Heatmap"));
        assert!(text.contains("Key metrics: Price Elasticity | Rev. Per View | Conversion Rate"));
    }

    #[test]
    fn test_format_logic() {
        let text = format_logic();
        assert!(text.contains("[1] Data Collection"));
        assert!(text.contains("[4] Optimization"));
        assert_eq!(text.matches('↓').count(), 3);
        assert!(text.ends_with(ALGORITHM_LISTING));
    }
}
