//! CLI command for viewing the audit log

use crate::audit::AuditLogger;
use crate::config::Settings;
use crate::error::AnalyticsResult;

/// Print the most recent audit entries, oldest first
pub fn handle_log_command(
    audit: &AuditLogger,
    settings: &Settings,
    limit: usize,
    json: bool,
) -> AnalyticsResult<()> {
    let entries = audit.read_recent(limit)?;

    if entries.is_empty() {
        println!("No analysis runs recorded yet.");
        println!("Log file: {}", audit.path().display());
        return Ok(());
    }

    for entry in &entries {
        if json {
            println!("{}", serde_json::to_string(entry)?);
        } else {
            println!("{}", entry.format_human_readable(&settings.currency_symbol));
        }
    }

    let total = audit.entry_count()?;
    if total > entries.len() {
        println!("({} of {} entries shown)", entries.len(), total);
    }

    Ok(())
}
