//! Budget warning policy
//!
//! After every addition the ledger compares total expenses with the monthly
//! budget. The result is advisory: it never blocks a transaction.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Advisory signal raised when expenses approach or pass the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetWarning {
    /// Expenses are above 90% of the budget but not over it
    NearLimit,
    /// Expenses are over the budget
    OverLimit,
}

impl BudgetWarning {
    /// Evaluate the policy for the given totals
    ///
    /// `NearLimit` when `budget * 0.9 < expenses <= budget`, `OverLimit` when
    /// `expenses > budget`. The 0.9 factor is applied in integer cents
    /// (`expenses * 10 > budget * 9`), so the boundary is exact.
    pub fn evaluate(budget: Money, total_expenses: Money) -> Option<Self> {
        let budget = i128::from(budget.cents());
        let expenses = i128::from(total_expenses.cents());

        if expenses > budget {
            Some(Self::OverLimit)
        } else if expenses * 10 > budget * 9 {
            Some(Self::NearLimit)
        } else {
            None
        }
    }

    /// Message shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            Self::NearLimit => "Warning: Your expenses are close to exceeding your budget!",
            Self::OverLimit => "Warning: You have exceeded your budget!",
        }
    }
}

impl fmt::Display for BudgetWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
