//! Snapshot codec
//!
//! A snapshot is the whole session state (ledger + category registry) in a
//! single versioned JSON document. Field order follows the on-disk contract:
//! schema version, transactions, budget, totals, then both category lists.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{CategoryRegistry, Ledger, Money, Transaction};

use super::file_io::{read_json_required, write_json_atomic};

/// Current snapshot schema version
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

/// Serializable form of the session state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub schema_version: u32,
    pub transactions: Vec<Transaction>,
    pub budget: Money,
    pub total_income: Money,
    pub total_expenses: Money,
    pub income_categories: Vec<String>,
    pub expense_categories: Vec<String>,
}

impl Snapshot {
    /// Capture the current state
    pub fn capture(ledger: &Ledger, categories: &CategoryRegistry) -> Self {
        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            transactions: ledger.transactions().to_vec(),
            budget: ledger.budget(),
            total_income: ledger.total_income(),
            total_expenses: ledger.total_expenses(),
            income_categories: categories.income().to_vec(),
            expense_categories: categories.expense().to_vec(),
        }
    }

    /// Rebuild the ledger and registry, checking the stored invariants
    pub fn restore(self) -> FinanceResult<(Ledger, CategoryRegistry)> {
        if self.schema_version == 0 || self.schema_version > SNAPSHOT_SCHEMA_VERSION {
            return Err(FinanceError::CorruptData(format!(
                "unsupported snapshot schema version {} (this build reads up to {})",
                self.schema_version, SNAPSHOT_SCHEMA_VERSION
            )));
        }

        let ledger = Ledger::from_parts(
            self.transactions,
            self.budget,
            self.total_income,
            self.total_expenses,
        )?;
        let categories =
            CategoryRegistry::from_parts(self.income_categories, self.expense_categories);

        Ok((ledger, categories))
    }
}

/// Write a snapshot of the state to `path` atomically
pub fn save_snapshot(
    path: &Path,
    ledger: &Ledger,
    categories: &CategoryRegistry,
) -> FinanceResult<()> {
    write_json_atomic(path, &Snapshot::capture(ledger, categories))
}

/// Read a snapshot from `path`
///
/// `NotFound` if the file is missing, `CorruptData` if it cannot be decoded
/// or its contents are inconsistent.
pub fn load_snapshot(path: &Path) -> FinanceResult<(Ledger, CategoryRegistry)> {
    let snapshot: Snapshot = read_json_required(path)?;
    snapshot.restore()
}
