//! Audit logger for the append-only analysis log
//!
//! Each entry is written as one JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{AnalyticsError, AnalyticsResult};

use super::entry::AuditEntry;

/// Appends audit entries to, and reads them back from, a JSONL file
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry
    pub fn log(&self, entry: &AuditEntry) -> AnalyticsResult<()> {
        if let Some(parent) = self.log_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AnalyticsError::Io(format!("Failed to create audit log directory: {}", e))
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| AnalyticsError::Io(format!("Failed to open audit log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| AnalyticsError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| AnalyticsError::Io(format!("Failed to write audit entry: {}", e)))?;

        file.flush()
            .map_err(|e| AnalyticsError::Io(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }

    /// All entries, oldest first
    pub fn read_all(&self) -> AnalyticsResult<Vec<AuditEntry>> {
        let Some(reader) = self.open_reader()? else {
            return Ok(Vec::new());
        };

        let mut entries = Vec::new();
        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                AnalyticsError::Io(format!("Failed to read audit log line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: AuditEntry = serde_json::from_str(&line).map_err(|e| {
                AnalyticsError::Json(format!(
                    "Failed to parse audit entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// The most recent `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> AnalyticsResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    /// Number of non-empty lines in the log
    pub fn entry_count(&self) -> AnalyticsResult<usize> {
        let Some(reader) = self.open_reader()? else {
            return Ok(0);
        };
        Ok(reader
            .lines()
            .map_while(Result::ok)
            .filter(|l| !l.trim().is_empty())
            .count())
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }

    fn open_reader(&self) -> AnalyticsResult<Option<BufReader<File>>> {
        if !self.log_path.exists() {
            return Ok(None);
        }
        let file = File::open(&self.log_path)
            .map_err(|e| AnalyticsError::Io(format!("Failed to open audit log: {}", e)))?;
        Ok(Some(BufReader::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::Operation;
    use crate::dataset::Dataset;
    use crate::models::{Category, CategoryFilter};
    use crate::services::DashboardView;
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        (logger, temp_dir)
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        let dataset = Dataset::sample().unwrap();
        let view = DashboardView::build(dataset.records(), CategoryFilter::All);

        logger.log(&AuditEntry::report(&view, "buckets")).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Report);
        assert_eq!(entries[0].filter, CategoryFilter::All);
    }

    #[test]
    fn test_read_recent_keeps_order() {
        let (logger, _temp) = create_test_logger();
        let dataset = Dataset::sample().unwrap();

        for filter in CategoryFilter::OPTIONS {
            let view = DashboardView::build(dataset.records(), filter);
            logger.log(&AuditEntry::select(&view)).unwrap();
        }

        assert_eq!(logger.entry_count().unwrap(), 4);
        let recent = logger.read_recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].filter, CategoryFilter::Only(Category::Business));
        assert_eq!(recent[1].filter, CategoryFilter::Only(Category::Design));
    }

    #[test]
    fn test_empty_log() {
        let (logger, _temp) = create_test_logger();

        assert!(!logger.path().exists());
        assert_eq!(logger.entry_count().unwrap(), 0);
        assert!(logger.read_all().unwrap().is_empty());
        assert!(logger.read_recent(5).unwrap().is_empty());
    }

    #[test]
    fn test_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("nested").join("audit.log"));
        let dataset = Dataset::sample().unwrap();
        let view = DashboardView::build(dataset.records(), CategoryFilter::All);

        logger.log(&AuditEntry::select(&view)).unwrap();
        assert_eq!(logger.entry_count().unwrap(), 1);
    }

    #[test]
    fn test_corrupt_line_reports_position() {
        let (logger, _temp) = create_test_logger();
        std::fs::write(logger.path(), "not json\n").unwrap();

        let err = logger.read_all().unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_survives_restart() {
        let (logger, temp) = create_test_logger();
        let dataset = Dataset::sample().unwrap();
        let view = DashboardView::build(dataset.records(), CategoryFilter::All);
        logger.log(&AuditEntry::select(&view)).unwrap();

        let reopened = AuditLogger::new(temp.path().join("audit.log"));
        assert_eq!(reopened.read_all().unwrap().len(), 1);
    }
}
