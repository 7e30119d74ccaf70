//! Course categories and the category filter
//!
//! The filter is a closed choice: one of the known categories or the "All"
//! sentinel. Text that names neither is rejected rather than defaulted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AnalyticsError;

/// Marketplace course category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Tech & Coding")]
    TechCoding,
    #[serde(rename = "Business")]
    Business,
    #[serde(rename = "Design")]
    Design,
}

impl Category {
    /// All categories in selector order
    pub const ALL: [Category; 3] = [Category::TechCoding, Category::Business, Category::Design];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::TechCoding => "Tech & Coding",
            Self::Business => "Business",
            Self::Design => "Design",
        }
    }

    /// Shell-friendly spelling accepted on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            Self::TechCoding => "tech-coding",
            Self::Business => "business",
            Self::Design => "design",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted) || c.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AnalyticsError::invalid_filter(s))
    }
}

/// Current category selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CategoryFilter {
    /// Every category; charts show per-bin sums
    #[default]
    All,
    /// A single category; charts show its records directly
    Only(Category),
}

impl CategoryFilter {
    /// Selector options in display order
    pub const OPTIONS: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::TechCoding),
        CategoryFilter::Only(Category::Business),
        CategoryFilter::Only(Category::Design),
    ];

    /// Whether a record of `category` passes this filter
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == category,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Label shown in the category selector
    pub fn selector_label(&self) -> &'static str {
        match self {
            Self::All => "All Categories",
            Self::Only(category) => category.label(),
        }
    }

    /// Next option, wrapping around
    pub fn next(&self) -> Self {
        let pos = self.position();
        Self::OPTIONS[(pos + 1) % Self::OPTIONS.len()]
    }

    /// Previous option, wrapping around
    pub fn prev(&self) -> Self {
        let pos = self.position();
        Self::OPTIONS[(pos + Self::OPTIONS.len() - 1) % Self::OPTIONS.len()]
    }

    fn position(&self) -> usize {
        Self::OPTIONS.iter().position(|o| o == self).unwrap_or(0)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Only(category) => write!(f, "{}", category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<Category>()
            .map(Self::Only)
            .map_err(|_| AnalyticsError::invalid_filter(s))
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.to_string()
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = AnalyticsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
