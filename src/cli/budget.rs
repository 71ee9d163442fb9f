//! Budget CLI commands

use clap::Subcommand;

use super::CliContext;
use crate::display::format_budget_status;
use crate::error::FinanceResult;
use crate::validation;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the monthly budget
    Set {
        /// Budget amount (e.g., "500" or "500.00")
        amount: String,
    },

    /// Show the budget and how much of it is spent
    Show,
}

/// Handle a budget command
pub fn handle_budget_command(ctx: &mut CliContext, cmd: BudgetCommands) -> FinanceResult<()> {
    match cmd {
        BudgetCommands::Set { amount } => {
            let amount = validation::parse_amount(&amount)?;
            ctx.session.set_budget(amount)?;
            ctx.persist()?;

            println!(
                "Budget set to: {}",
                amount.format_with_symbol(ctx.currency())
            );
            if let Some(warning) = ctx.session.budget_status() {
                println!("{}", warning);
            }
        }

        BudgetCommands::Show => {
            let summary = ctx.session.summary();
            print!(
                "{}",
                format_budget_status(&summary, ctx.session.budget_status(), ctx.currency())
            );
        }
    }

    Ok(())
}
