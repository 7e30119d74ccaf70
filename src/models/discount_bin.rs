//! Discount bins
//!
//! A discount bin groups transactions by how deep the discount was. The bins
//! have a fixed canonical order, from full price to the deepest discount,
//! which every aggregate and chart preserves.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Depth-of-discount bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DiscountBin {
    #[serde(rename = "0% (Full Price)")]
    FullPrice,
    #[serde(rename = "10-20% Off")]
    Light,
    #[serde(rename = "30-50% Off")]
    Moderate,
    #[serde(rename = "60-80% Off")]
    Deep,
}

impl DiscountBin {
    /// All bins in canonical order (increasing discount depth)
    pub const ALL: [DiscountBin; 4] = [
        DiscountBin::FullPrice,
        DiscountBin::Light,
        DiscountBin::Moderate,
        DiscountBin::Deep,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullPrice => "0% (Full Price)",
            Self::Light => "10-20% Off",
            Self::Moderate => "30-50% Off",
            Self::Deep => "60-80% Off",
        }
    }

    /// Compact label for chart axes
    pub fn short_label(&self) -> &'static str {
        match self {
            Self::FullPrice => "0%",
            Self::Light => "10-20%",
            Self::Moderate => "30-50%",
            Self::Deep => "60-80%",
        }
    }

    /// Position in the canonical order
    pub fn index(&self) -> usize {
        match self {
            Self::FullPrice => 0,
            Self::Light => 1,
            Self::Moderate => 2,
            Self::Deep => 3,
        }
    }
}

impl fmt::Display for DiscountBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let mut sorted = DiscountBin::ALL;
        sorted.sort();
        assert_eq!(sorted, DiscountBin::ALL);
        for (i, bin) in DiscountBin::ALL.iter().enumerate() {
            assert_eq!(bin.index(), i);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(DiscountBin::FullPrice.to_string(), "0% (Full Price)");
        assert_eq!(DiscountBin::Deep.short_label(), "60-80%");
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&DiscountBin::Moderate).unwrap();
        assert_eq!(json, "\"30-50% Off\"");
        let bin: DiscountBin = serde_json::from_str("\"10-20% Off\"").unwrap();
        assert_eq!(bin, DiscountBin::Light);
    }
}
