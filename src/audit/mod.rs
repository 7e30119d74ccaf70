//! Audit logging for Marketplace Analytics
//!
//! Every report, export and TUI filter change is appended to a
//! line-delimited JSON log (JSONL) with a run id, timestamp, the category
//! selection and the totals that were shown.
//!
//! # Example
//!
//! ```rust,ignore
//! use marketplace_analytics::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let view = service.dashboard(CategoryFilter::All);
//! logger.log(&AuditEntry::report(&view, "buckets"))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
