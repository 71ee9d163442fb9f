//! Summary and budget formatting

use crate::models::{BudgetWarning, Summary};

/// Format the financial summary block
pub fn format_summary(summary: &Summary, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str("=== Financial Summary ===\n");
    output.push_str(&format!(
        "Budget:         {}\n",
        summary.budget.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total Income:   {}\n",
        summary.total_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total Expenses: {}\n",
        summary.total_expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Net Savings:    {}\n",
        summary.net_savings.format_with_symbol(symbol)
    ));
    output
}

/// Format the budget line plus any active warning
pub fn format_budget_status(
    summary: &Summary,
    warning: Option<BudgetWarning>,
    symbol: &str,
) -> String {
    let mut output = format!(
        "Budget: {} (spent {})\n",
        summary.budget.format_with_symbol(symbol),
        summary.total_expenses.format_with_symbol(symbol)
    );
    if let Some(warning) = warning {
        output.push_str(&format!("{}\n", warning));
    }
    output
}
