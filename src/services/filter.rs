//! Category filter
//!
//! Selects the records of one category, or all of them, without copying or
//! reordering.

use crate::error::AnalyticsResult;
use crate::models::{CategoryFilter, EnrichedRecord};

/// Records passing `filter`, in their original order
pub fn filter_by_category(records: &[EnrichedRecord], filter: CategoryFilter) -> Vec<&EnrichedRecord> {
    records.iter().filter(|r| filter.matches(r.category)).collect()
}

/// Like [`filter_by_category`], for a selection given as text
///
/// Fails with `InvalidFilter` when the text is neither a known category nor "All".
pub fn filter_by_label<'a>(
    records: &'a [EnrichedRecord],
    selection: &str,
) -> AnalyticsResult<Vec<&'a EnrichedRecord>> {
    let filter: CategoryFilter = selection.parse()?;
    Ok(filter_by_category(records, filter))
}
