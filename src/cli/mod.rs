//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the session service.

pub mod budget;
pub mod category;
pub mod config;
pub mod export;
pub mod history;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use config::handle_config_command;
pub use export::handle_export_command;
pub use history::handle_history_command;
pub use transaction::{handle_transaction_command, TransactionCommands};

use crate::config::{FinancePaths, Settings};
use crate::error::FinanceResult;
use crate::services::Session;

/// Everything a command handler needs for one invocation
pub struct CliContext {
    pub session: Session,
    pub settings: Settings,
    pub paths: FinancePaths,
}

impl CliContext {
    pub fn new(session: Session, settings: Settings, paths: FinancePaths) -> Self {
        Self {
            session,
            settings,
            paths,
        }
    }

    /// Write the session back to its snapshot file
    pub fn persist(&self) -> FinanceResult<()> {
        self.session.save(&self.paths.snapshot_file())
    }

    pub fn currency(&self) -> &str {
        &self.settings.currency_symbol
    }
}
