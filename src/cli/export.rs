//! CLI command for exporting transactions to CSV

use std::path::PathBuf;

use super::CliContext;
use crate::error::FinanceResult;

/// Handle the export command
///
/// Writes to `output` when given, otherwise to the configured export file.
pub fn handle_export_command(ctx: &CliContext, output: Option<PathBuf>) -> FinanceResult<()> {
    let path = output.unwrap_or_else(|| ctx.settings.export_file.clone());

    ctx.session.export_csv(&path)?;

    let count = ctx.session.list_transactions().len();
    println!(
        "Exported {} transaction{} to: {}",
        count,
        if count == 1 { "" } else { "s" },
        path.display()
    );

    Ok(())
}
