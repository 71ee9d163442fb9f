use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use finance_tracker::audit::AuditLogger;
use finance_tracker::cli::{
    handle_budget_command, handle_category_command, handle_config_command, handle_export_command,
    handle_history_command, handle_transaction_command, CliContext,
};
use finance_tracker::config::{FinancePaths, Settings};
use finance_tracker::display::format_summary;
use finance_tracker::services::{LoadStatus, Session};

#[derive(Parser)]
#[command(
    name = "finance",
    version,
    about = "Track income, expenses and a monthly budget from the command line",
    long_about = "A personal finance tracker. Record income and expenses by category, \
                  set a monthly budget and get warned as spending approaches it, \
                  and export the register to CSV."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(finance_tracker::cli::TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(finance_tracker::cli::BudgetCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(finance_tracker::cli::CategoryCommands),

    /// Show budget, totals and net savings
    Summary,

    /// Export all transactions to CSV
    Export {
        /// Output file path (defaults to the configured export file)
        output: Option<PathBuf>,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths, optionally changing settings
    Config {
        /// Currency symbol used when printing amounts
        #[arg(long)]
        currency: Option<String>,
        /// Record changes in the audit log (true/false)
        #[arg(long)]
        audit: Option<bool>,
        /// Default path for `export`
        #[arg(long)]
        export_file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FinancePaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("Finance Tracker - income, expenses and budget");
        println!();
        println!("Run 'finance --help' for usage information.");
        return Ok(());
    };

    // Load the previous session; a corrupt snapshot aborts before anything
    // can overwrite it.
    let mut session = Session::new();
    if settings.audit_enabled {
        session = session.with_audit(AuditLogger::new(paths.audit_log()));
    }
    if session.load_or_fresh(&paths.snapshot_file())? == LoadStatus::Fresh {
        eprintln!("No previous data found. Starting fresh.");
    }

    let mut ctx = CliContext::new(session, settings, paths);

    match command {
        Commands::Transaction(cmd) => handle_transaction_command(&mut ctx, cmd)?,
        Commands::Budget(cmd) => handle_budget_command(&mut ctx, cmd)?,
        Commands::Category(cmd) => handle_category_command(&mut ctx, cmd)?,
        Commands::Summary => {
            print!("{}", format_summary(&ctx.session.summary(), ctx.currency()));
        }
        Commands::Export { output } => handle_export_command(&ctx, output)?,
        Commands::History { limit } => handle_history_command(&ctx, limit)?,
        Commands::Config {
            currency,
            audit,
            export_file,
        } => handle_config_command(&mut ctx, currency, audit, export_file)?,
    }

    Ok(())
}
