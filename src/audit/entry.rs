//! Audit log records
//!
//! One `AuditEntry` per committed change to the session: a transaction added
//! or deleted, a category created, or the budget moved.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Money, Transaction, TransactionKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What part of the session a change touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Transaction,
    Category,
    Budget,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transaction => "Transaction",
            Self::Category => "Category",
            Self::Budget => "Budget",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single line of the audit log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub entity_type: EntityType,

    /// Transaction id, category kind, or "budget"
    pub entity_id: String,

    /// One-line description of the change, amounts already formatted
    pub summary: String,

    /// The full transaction record, for transaction entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<Transaction>,
}

impl AuditEntry {
    fn new(
        operation: Operation,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        summary: String,
        record: Option<Transaction>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            summary,
            record,
        }
    }

    pub fn transaction_added(txn: &Transaction) -> Self {
        Self::new(
            Operation::Create,
            EntityType::Transaction,
            txn.id().to_string(),
            describe(txn),
            Some(txn.clone()),
        )
    }

    pub fn transaction_deleted(txn: &Transaction) -> Self {
        Self::new(
            Operation::Delete,
            EntityType::Transaction,
            txn.id().to_string(),
            describe(txn),
            Some(txn.clone()),
        )
    }

    pub fn category_added(kind: TransactionKind, name: &str) -> Self {
        Self::new(
            Operation::Create,
            EntityType::Category,
            kind.label().to_lowercase(),
            name.to_string(),
            None,
        )
    }

    pub fn budget_changed(before: Money, after: Money) -> Self {
        Self::new(
            Operation::Update,
            EntityType::Budget,
            "budget",
            format!("{} -> {}", before, after),
            None,
        )
    }

    /// Render the entry for `history`, e.g.
    /// `[2025-01-15 10:30:00 UTC] UPDATE Budget budget: $0.00 -> $500.00`
    pub fn format_human_readable(&self) -> String {
        format!(
            "[{}] {} {} {}: {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id,
            self.summary
        )
    }
}

fn describe(txn: &Transaction) -> String {
    format!(
        "{} {} {} ({})",
        txn.kind().label(),
        txn.description(),
        txn.amount(),
        txn.category()
    )
}
