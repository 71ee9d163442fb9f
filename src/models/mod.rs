//! Core data models for the finance tracker
//!
//! This module contains the data structures of the ledger domain:
//! transactions, money, categories, the budget policy and the ledger itself.

pub mod budget;
pub mod category;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod transaction;

pub use budget::BudgetWarning;
pub use category::{CategoryRegistry, CategorySelection};
pub use ids::TransactionId;
pub use ledger::{AddOutcome, Ledger, Summary};
pub use money::Money;
pub use transaction::{Transaction, TransactionKind};
