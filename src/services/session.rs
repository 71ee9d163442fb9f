//! Session service
//!
//! A `Session` owns everything one run of the tracker mutates: the ledger,
//! the category registry and the audit logger. Front ends hold a `Session`
//! and call its methods; nothing in the crate keeps process-wide state.

use std::path::Path;

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::FinanceResult;
use crate::export::export_transactions_csv_file;
use crate::models::{
    AddOutcome, BudgetWarning, CategoryRegistry, CategorySelection, Ledger, Money, Summary,
    Transaction, TransactionKind,
};
use crate::storage::{load_snapshot, save_snapshot};
use crate::validation;

/// What `load_or_fresh` found on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// A snapshot was read; holds its transaction count
    Loaded(usize),
    /// No snapshot existed; the session starts empty
    Fresh,
}

/// Mutable state of one tracker run
#[derive(Debug, Default)]
pub struct Session {
    ledger: Ledger,
    categories: CategoryRegistry,
    audit: Option<AuditLogger>,
}

impl Session {
    /// Create an empty session with the default categories
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every mutation in the given audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn categories(&self) -> &CategoryRegistry {
        &self.categories
    }

    /// Set the monthly budget
    pub fn set_budget(&mut self, amount: Money) -> FinanceResult<()> {
        let amount = validation::validate_budget(amount)?;

        self.record(AuditEntry::budget_changed(self.ledger.budget(), amount))?;
        self.ledger.set_budget(amount)
    }

    /// Add a transaction under an already-known category name
    pub fn add_transaction(
        &mut self,
        kind: TransactionKind,
        description: &str,
        amount: Money,
        category: &str,
    ) -> FinanceResult<AddOutcome> {
        let txn = self
            .ledger
            .prepare_transaction(kind, description, amount, category)?;

        self.record(AuditEntry::transaction_added(&txn))?;
        self.ledger.insert(txn)
    }

    /// Add a transaction, resolving the category from a menu selection
    ///
    /// The transaction is fully checked before the registry is touched, so a
    /// rejected transaction never leaves a new category behind.
    pub fn add_transaction_with_selection(
        &mut self,
        kind: TransactionKind,
        description: &str,
        amount: Money,
        selection: CategorySelection,
    ) -> FinanceResult<AddOutcome> {
        let (category, is_new) = match selection {
            CategorySelection::New(name) => (validation::validate_category_name(&name)?, true),
            existing => (self.categories.resolve_or_create(kind, existing)?, false),
        };
        self.ledger
            .prepare_transaction(kind, description, amount, &category)?;

        if is_new {
            self.add_category(kind, &category)?;
        }
        self.add_transaction(kind, description, amount, &category)
    }

    /// Delete the transaction at a 1-based position
    pub fn delete_transaction(&mut self, position: usize) -> FinanceResult<Transaction> {
        let entry = AuditEntry::transaction_deleted(self.ledger.transaction_at(position)?);

        self.record(entry)?;
        self.ledger.delete_transaction(position)
    }

    /// All transactions in insertion order
    pub fn list_transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    pub fn summary(&self) -> Summary {
        self.ledger.summary()
    }

    pub fn budget_status(&self) -> Option<BudgetWarning> {
        self.ledger.budget_status()
    }

    /// Categories known for a kind
    pub fn list_categories(&self, kind: TransactionKind) -> &[String] {
        self.categories.list(kind)
    }

    /// Append a new category for a kind
    pub fn add_category(&mut self, kind: TransactionKind, name: &str) -> FinanceResult<String> {
        let name = validation::validate_category_name(name)?;

        self.record(AuditEntry::category_added(kind, &name))?;
        self.categories.add(kind, &name)
    }

    /// Write the whole session to a snapshot file
    pub fn save(&self, path: &Path) -> FinanceResult<()> {
        save_snapshot(path, &self.ledger, &self.categories)
    }

    /// Replace the session state with a snapshot
    ///
    /// On error the current state is left as it was.
    pub fn load(&mut self, path: &Path) -> FinanceResult<()> {
        let (ledger, categories) = load_snapshot(path)?;
        self.ledger = ledger;
        self.categories = categories;
        Ok(())
    }

    /// Load a snapshot if one exists, otherwise keep the empty state
    pub fn load_or_fresh(&mut self, path: &Path) -> FinanceResult<LoadStatus> {
        match self.load(path) {
            Ok(()) => Ok(LoadStatus::Loaded(self.ledger.len())),
            Err(e) if e.is_not_found() => Ok(LoadStatus::Fresh),
            Err(e) => Err(e),
        }
    }

    /// Export the ledger as CSV
    pub fn export_csv(&self, path: &Path) -> FinanceResult<()> {
        export_transactions_csv_file(path, self.ledger.transactions())
    }

    /// Write an entry ahead of the change it describes
    fn record(&self, entry: AuditEntry) -> FinanceResult<()> {
        match &self.audit {
            Some(logger) => logger.log(&entry),
            None => Ok(()),
        }
    }
}
