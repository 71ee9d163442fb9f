//! Transaction CLI commands
//!
//! Implements CLI commands for adding, listing and deleting transactions.

use clap::Subcommand;

use super::CliContext;
use crate::display::{format_category_menu, format_transaction_register};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{CategorySelection, TransactionKind};
use crate::validation;

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Add a new income or expense
    Add {
        /// "income" or "expense" (or 1 / 2)
        kind: String,
        /// Amount, always positive (e.g., "12.50")
        amount: String,
        /// What the money was for
        description: String,
        /// Existing category name
        #[arg(short, long, conflicts_with_all = ["pick", "new_category"])]
        category: Option<String>,
        /// Existing category by its number in `category list`
        #[arg(short, long, conflicts_with = "new_category")]
        pick: Option<String>,
        /// Create a new category and use it
        #[arg(short = 'n', long)]
        new_category: Option<String>,
    },

    /// List all transactions, numbered
    List,

    /// Delete a transaction by its number in `transaction list`
    Delete {
        /// Position as shown by `transaction list` (starting at 1)
        position: usize,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    ctx: &mut CliContext,
    cmd: TransactionCommands,
) -> FinanceResult<()> {
    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            description,
            category,
            pick,
            new_category,
        } => {
            let kind = validation::parse_kind(&kind)?;
            let amount = validation::parse_amount(&amount)?;
            let selection = category_selection(ctx, kind, category, pick, new_category)?;

            let outcome = ctx
                .session
                .add_transaction_with_selection(kind, &description, amount, selection)?;
            ctx.persist()?;

            println!("Transaction added successfully!");
            println!("  {}", outcome.transaction);
            println!("  ID: {}", outcome.transaction.id());
            if let Some(warning) = outcome.warning {
                println!("{}", warning);
            }
        }

        TransactionCommands::List => {
            print!(
                "{}",
                format_transaction_register(ctx.session.list_transactions(), ctx.currency())
            );
        }

        TransactionCommands::Delete { position } => {
            let removed = ctx.session.delete_transaction(position)?;
            ctx.persist()?;

            println!("Transaction deleted successfully!");
            println!("  {}", removed);
        }
    }

    Ok(())
}

/// Map the category flags onto a registry selection
fn category_selection(
    ctx: &CliContext,
    kind: TransactionKind,
    category: Option<String>,
    pick: Option<String>,
    new_category: Option<String>,
) -> FinanceResult<CategorySelection> {
    if let Some(name) = new_category {
        return Ok(CategorySelection::New(name));
    }

    if let Some(choice) = pick {
        let count = ctx.session.list_categories(kind).len();
        let position = validation::parse_menu_choice(&choice, 1, count)?;
        return Ok(CategorySelection::Existing(position));
    }

    if let Some(name) = category {
        let position = ctx
            .session
            .list_categories(kind)
            .iter()
            .position(|c| c.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| {
                FinanceError::Validation(format!(
                    "Unknown {} category '{}'; use --new-category to create it",
                    kind.label().to_lowercase(),
                    name.trim()
                ))
            })?;
        return Ok(CategorySelection::Existing(position + 1));
    }

    Err(FinanceError::Validation(format!(
        "Choose a category with --pick N or --new-category NAME\n{}",
        format_category_menu(ctx.session.categories(), kind)
    )))
}
