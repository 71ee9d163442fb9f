//! CLI command for viewing and changing settings

use std::path::PathBuf;

use super::CliContext;
use crate::error::{FinanceError, FinanceResult};

/// Apply any given setting changes, save them, then print the configuration
pub fn handle_config_command(
    ctx: &mut CliContext,
    currency: Option<String>,
    audit: Option<bool>,
    export_file: Option<PathBuf>,
) -> FinanceResult<()> {
    let changed = currency.is_some() || audit.is_some() || export_file.is_some();

    if let Some(symbol) = currency {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(FinanceError::Validation(
                "Currency symbol cannot be empty".into(),
            ));
        }
        ctx.settings.currency_symbol = symbol.to_string();
    }
    if let Some(enabled) = audit {
        ctx.settings.audit_enabled = enabled;
    }
    if let Some(path) = export_file {
        ctx.settings.export_file = path;
    }

    if changed {
        ctx.settings.save(&ctx.paths)?;
        println!("Settings saved to: {}", ctx.paths.settings_file().display());
        println!();
    }

    println!("Finance Tracker Configuration");
    println!("=============================");
    println!("Base directory: {}", ctx.paths.base_dir().display());
    println!("Snapshot file:  {}", ctx.paths.snapshot_file().display());
    println!("Audit log:      {}", ctx.paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", ctx.settings.currency_symbol);
    println!("  Audit enabled:   {}", ctx.settings.audit_enabled);
    println!("  Export file:     {}", ctx.settings.export_file.display());

    Ok(())
}
