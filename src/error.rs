//! Custom error types for Marketplace Analytics
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Marketplace Analytics operations
#[derive(Error, Debug)]
pub enum AnalyticsError {
    /// A rate would divide by zero pageviews
    #[error("Division by zero: {context}")]
    DivisionByZero { context: String },

    /// A revenue or total does not fit in the numeric range
    #[error("Arithmetic overflow: {context}")]
    Overflow { context: String },

    /// The category selection is not a known category or "All"
    #[error("Invalid category filter: '{0}' (expected All, Tech & Coding, Business or Design)")]
    InvalidFilter(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl AnalyticsError {
    /// Create a division-by-zero error describing where it happened
    pub fn division_by_zero(context: impl Into<String>) -> Self {
        Self::DivisionByZero {
            context: context.into(),
        }
    }

    /// Create an overflow error describing the value that did not fit
    pub fn overflow(context: impl Into<String>) -> Self {
        Self::Overflow {
            context: context.into(),
        }
    }

    /// Create an invalid-filter error for the rejected selection
    pub fn invalid_filter(selection: impl Into<String>) -> Self {
        Self::InvalidFilter(selection.into())
    }

    /// Check if this is a division-by-zero error
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. })
    }

    /// Check if this is an overflow error
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }

    /// Check if this is an invalid filter error
    pub fn is_invalid_filter(&self) -> bool {
        matches!(self, Self::InvalidFilter(_))
    }
}

impl From<std::io::Error> for AnalyticsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AnalyticsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for AnalyticsError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for Marketplace Analytics operations
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnalyticsError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_division_by_zero() {
        let err = AnalyticsError::division_by_zero("Design / 10-20% Off has zero views");
        assert_eq!(
            err.to_string(),
            "Division by zero: Design / 10-20% Off has zero views"
        );
        assert!(err.is_division_by_zero());
        assert!(!err.is_invalid_filter());
    }

    #[test]
    fn test_invalid_filter() {
        let err = AnalyticsError::invalid_filter("Music");
        assert!(err.is_invalid_filter());
        assert!(err.to_string().contains("'Music'"));
    }

    #[test]
    fn test_overflow() {
        let err = AnalyticsError::overflow("Tech & Coding / Full Price revenue");
        assert!(err.is_overflow());
        assert!(!err.is_division_by_zero());
        assert_eq!(
            err.to_string(),
            "Arithmetic overflow: Tech & Coding / Full Price revenue"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AnalyticsError = io_err.into();
        assert!(matches!(err, AnalyticsError::Io(_)));
    }
}
