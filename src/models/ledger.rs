//! Ledger of transactions with running totals
//!
//! The ledger owns the transaction list together with the budget and the two
//! aggregates. Totals are updated in place on every add and delete; they must
//! always equal a fresh sum over the list.

use serde::{Deserialize, Serialize};

use super::budget::BudgetWarning;
use super::money::Money;
use super::transaction::{Transaction, TransactionKind};
use crate::error::{FinanceError, FinanceResult};
use crate::validation;

/// Budget and totals at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub budget: Money,
    pub total_income: Money,
    pub total_expenses: Money,
    pub net_savings: Money,
}

/// Result of adding a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    /// The stored record
    pub transaction: Transaction,
    /// Budget signal evaluated right after the insert
    pub warning: Option<BudgetWarning>,
}

/// Insertion-ordered transactions plus budget and running totals
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    budget: Money,
    total_income: Money,
    total_expenses: Money,
}

impl Ledger {
    /// Create an empty ledger with no budget
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from stored parts
    ///
    /// Rejects parts that break the ledger's invariants: an invalid record,
    /// a negative budget, or totals that differ from the transaction sums.
    pub fn from_parts(
        transactions: Vec<Transaction>,
        budget: Money,
        total_income: Money,
        total_expenses: Money,
    ) -> FinanceResult<Self> {
        for (index, txn) in transactions.iter().enumerate() {
            txn.validate().map_err(|e| {
                FinanceError::CorruptData(format!("transaction {}: {}", index + 1, e))
            })?;
        }

        if budget.is_negative() {
            return Err(FinanceError::CorruptData(format!(
                "budget cannot be negative (got {})",
                budget
            )));
        }

        let ledger = Self {
            transactions,
            budget,
            total_income,
            total_expenses,
        };

        let (income, expenses) = checked_totals(&ledger.transactions).ok_or_else(|| {
            FinanceError::CorruptData("transaction amounts overflow the totals".into())
        })?;
        if income != total_income || expenses != total_expenses {
            return Err(FinanceError::CorruptData(format!(
                "stored totals (income {}, expenses {}) do not match transactions (income {}, expenses {})",
                total_income, total_expenses, income, expenses
            )));
        }

        Ok(ledger)
    }

    /// Set the monthly budget
    pub fn set_budget(&mut self, value: Money) -> FinanceResult<()> {
        self.budget = validation::validate_budget(value)?;
        Ok(())
    }

    /// Record a new transaction and update the matching total
    pub fn add_transaction(
        &mut self,
        kind: TransactionKind,
        description: &str,
        amount: Money,
        category: &str,
    ) -> FinanceResult<AddOutcome> {
        let txn = self.prepare_transaction(kind, description, amount, category)?;
        self.insert(txn)
    }

    /// Validate and build a transaction without storing it
    ///
    /// Fails if the amount would push the matching total out of range, so a
    /// prepared transaction can be inserted into an unchanged ledger.
    pub fn prepare_transaction(
        &self,
        kind: TransactionKind,
        description: &str,
        amount: Money,
        category: &str,
    ) -> FinanceResult<Transaction> {
        let amount = validation::validate_amount(amount)?;
        let description = validation::validate_description(description)?;

        let txn = Transaction::new(kind, description, amount, category)
            .map_err(|e| FinanceError::Validation(e.to_string()))?;
        self.total_after(&txn)?;

        Ok(txn)
    }

    /// Append a built transaction and update the matching total
    pub fn insert(&mut self, txn: Transaction) -> FinanceResult<AddOutcome> {
        let total = self.total_after(&txn)?;
        match txn.kind() {
            TransactionKind::Income => self.total_income = total,
            TransactionKind::Expense => self.total_expenses = total,
        }
        self.transactions.push(txn.clone());

        Ok(AddOutcome {
            transaction: txn,
            warning: self.budget_status(),
        })
    }

    /// Remove the transaction at a 1-based position
    pub fn delete_transaction(&mut self, position: usize) -> FinanceResult<Transaction> {
        self.transaction_at(position)?;

        let txn = self.transactions.remove(position - 1);
        match txn.kind() {
            TransactionKind::Income => self.total_income -= txn.amount(),
            TransactionKind::Expense => self.total_expenses -= txn.amount(),
        }

        Ok(txn)
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The transaction at a 1-based position
    pub fn transaction_at(&self, position: usize) -> FinanceResult<&Transaction> {
        position
            .checked_sub(1)
            .and_then(|index| self.transactions.get(index))
            .ok_or(FinanceError::Index {
                position,
                len: self.transactions.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn budget(&self) -> Money {
        self.budget
    }

    pub fn total_income(&self) -> Money {
        self.total_income
    }

    pub fn total_expenses(&self) -> Money {
        self.total_expenses
    }

    /// Budget, totals and net savings
    pub fn summary(&self) -> Summary {
        Summary {
            budget: self.budget,
            total_income: self.total_income,
            total_expenses: self.total_expenses,
            net_savings: self.total_income - self.total_expenses,
        }
    }

    /// Current budget signal, if any
    pub fn budget_status(&self) -> Option<BudgetWarning> {
        BudgetWarning::evaluate(self.budget, self.total_expenses)
    }

    /// Income and expense totals summed from scratch
    pub fn recomputed_totals(&self) -> (Money, Money) {
        let income = self
            .transactions
            .iter()
            .filter(|t| t.is_income())
            .map(Transaction::amount)
            .sum();
        let expenses = self
            .transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(Transaction::amount)
            .sum();
        (income, expenses)
    }

    fn total_after(&self, txn: &Transaction) -> FinanceResult<Money> {
        let current = match txn.kind() {
            TransactionKind::Income => self.total_income,
            TransactionKind::Expense => self.total_expenses,
        };
        current.checked_add(txn.amount()).ok_or_else(|| {
            FinanceError::Validation(format!(
                "Adding {} would push the {} total past the largest trackable amount",
                txn.amount(),
                txn.kind().label().to_lowercase()
            ))
        })
    }
}

/// Per-kind sums, or `None` if they leave the representable range
fn checked_totals(transactions: &[Transaction]) -> Option<(Money, Money)> {
    transactions
        .iter()
        .try_fold((Money::zero(), Money::zero()), |(income, expenses), txn| {
            match txn.kind() {
                TransactionKind::Income => Some((income.checked_add(txn.amount())?, expenses)),
                TransactionKind::Expense => Some((income, expenses.checked_add(txn.amount())?)),
            }
        })
}
