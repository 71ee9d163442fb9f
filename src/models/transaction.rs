//! Transaction model
//!
//! Income and expense records share one struct and are told apart by
//! [`TransactionKind`]. Records have no setters: a correction is a delete
//! followed by a fresh add.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;
use crate::validation;

/// Which running total a transaction feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// All kinds, in menu order
    pub const ALL: [TransactionKind; 2] = [TransactionKind::Income, TransactionKind::Expense];

    /// Label used in the CSV export and in listings
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" | "1" => Ok(Self::Income),
            "expense" | "2" => Ok(Self::Expense),
            other => Err(format!(
                "Unknown transaction type '{}' (expected income or expense)",
                other
            )),
        }
    }
}

/// A single income or expense record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    id: TransactionId,

    /// Income or expense
    kind: TransactionKind,

    /// What the money was for
    description: String,

    /// Always strictly positive; the kind carries the direction
    amount: Money,

    /// Category label from the registry
    category: String,

    /// When the transaction was recorded
    timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction stamped with the current time
    ///
    /// The timestamp is truncated to whole seconds so that it survives a
    /// snapshot round trip and matches its CSV rendering exactly.
    pub fn new(
        kind: TransactionKind,
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
    ) -> Result<Self, TransactionValidationError> {
        Self::with_timestamp(
            kind,
            description,
            amount,
            category,
            Utc::now().trunc_subsecs(0),
        )
    }

    /// Create a transaction with an explicit timestamp
    pub fn with_timestamp(
        kind: TransactionKind,
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, TransactionValidationError> {
        let txn = Self {
            id: TransactionId::new(),
            kind,
            description: description.into().trim().to_string(),
            amount,
            category: category.into(),
            timestamp,
        };
        txn.validate()?;
        Ok(txn)
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Validate the record
    ///
    /// Also used when loading a snapshot, since deserialization bypasses
    /// the constructors.
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !validation::is_positive_amount(self.amount) {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        if validation::is_all_digits(&self.description) {
            return Err(TransactionValidationError::NumericDescription(
                self.description.clone(),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {} {} ({})",
            self.timestamp.format("%Y-%m-%d %H:%M"),
            self.kind,
            self.description,
            self.amount,
            self.category
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    EmptyDescription,
    NumericDescription(String),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::NumericDescription(desc) => {
                write!(f, "Description cannot be only numbers: '{}'", desc)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(
            TransactionKind::Expense,
            "  Groceries  ",
            Money::from_cents(5000),
            "Food",
        )
        .unwrap();

        assert_eq!(txn.kind(), TransactionKind::Expense);
        assert_eq!(txn.description(), "Groceries");
        assert_eq!(txn.amount(), Money::from_cents(5000));
        assert_eq!(txn.category(), "Food");
        assert!(txn.is_expense());
        assert!(!txn.is_income());
        assert_eq!(txn.timestamp().timestamp_subsec_nanos(), 0);
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        for cents in [0, -1, -5000] {
            let result = Transaction::new(
                TransactionKind::Income,
                "Paycheck",
                Money::from_cents(cents),
                "Salary",
            );
            assert_eq!(
                result,
                Err(TransactionValidationError::NonPositiveAmount(
                    Money::from_cents(cents)
                ))
            );
        }
    }

    #[test]
    fn test_accepts_smallest_amount() {
        let txn = Transaction::new(
            TransactionKind::Income,
            "Interest",
            Money::smallest_positive(),
            "Investments",
        );
        assert!(txn.is_ok());
    }

    #[test]
    fn test_rejects_bad_descriptions() {
        let empty = Transaction::new(
            TransactionKind::Expense,
            "   ",
            Money::from_cents(100),
            "Food",
        );
        assert_eq!(empty, Err(TransactionValidationError::EmptyDescription));

        let numeric = Transaction::new(
            TransactionKind::Expense,
            "12345",
            Money::from_cents(100),
            "Food",
        );
        assert!(matches!(
            numeric,
            Err(TransactionValidationError::NumericDescription(_))
        ));

        let mixed = Transaction::new(
            TransactionKind::Expense,
            "Lunch 42",
            Money::from_cents(100),
            "Food",
        );
        assert!(mixed.is_ok());
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("income".parse(), Ok(TransactionKind::Income));
        assert_eq!("EXPENSE".parse(), Ok(TransactionKind::Expense));
        assert_eq!("1".parse(), Ok(TransactionKind::Income));
        assert_eq!("2".parse(), Ok(TransactionKind::Expense));
        assert!("transfer".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_serialization() {
        let txn = Transaction::with_timestamp(
            TransactionKind::Income,
            "Bonus payout",
            Money::from_cents(25000),
            "Bonus",
            fixed_time(),
        )
        .unwrap();

        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"kind\":\"income\""));
        assert!(json.contains("\"amount\":25000"));

        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, deserialized);
    }

    #[test]
    fn test_display() {
        let txn = Transaction::with_timestamp(
            TransactionKind::Expense,
            "Cinema",
            Money::from_cents(1250),
            "Entertainment",
            fixed_time(),
        )
        .unwrap();

        assert_eq!(
            txn.to_string(),
            "2025-01-15 10:30 [Expense] Cinema $12.50 (Entertainment)"
        );
    }
}
