//! Category CLI commands

use clap::Subcommand;

use super::CliContext;
use crate::display::format_category_lists;
use crate::error::FinanceResult;
use crate::validation;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List categories, numbered for `transaction add --pick`
    List {
        /// Only show "income" or "expense" categories
        kind: Option<String>,
    },

    /// Create a new category
    Add {
        /// "income" or "expense"
        kind: String,
        /// Category name
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(ctx: &mut CliContext, cmd: CategoryCommands) -> FinanceResult<()> {
    match cmd {
        CategoryCommands::List { kind } => {
            let kind = kind.as_deref().map(validation::parse_kind).transpose()?;
            print!("{}", format_category_lists(ctx.session.categories(), kind));
        }

        CategoryCommands::Add { kind, name } => {
            let kind = validation::parse_kind(&kind)?;
            let name = ctx.session.add_category(kind, &name)?;
            ctx.persist()?;

            println!(
                "Created {} category: {}",
                kind.label().to_lowercase(),
                name
            );
        }
    }

    Ok(())
}
