//! CLI command for viewing the audit log

use super::CliContext;
use crate::audit::AuditLogger;
use crate::error::FinanceResult;

/// Print the most recent audit entries, oldest first
pub fn handle_history_command(ctx: &CliContext, limit: usize) -> FinanceResult<()> {
    let logger = AuditLogger::new(ctx.paths.audit_log());
    let entries = logger.read_recent(limit)?;

    if entries.is_empty() {
        println!("No history recorded.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
