//! Finance Tracker - personal income, expense and budget tracking
//!
//! This library provides the core of a single-user finance tracker: a
//! ledger of income and expense transactions with running totals, a monthly
//! budget with near/over-limit warnings, per-kind category lists, a
//! versioned JSON snapshot and CSV export.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, categories, ledger)
//! - `validation`: Input validation shared by the models and front ends
//! - `storage`: Atomic JSON file storage and the session snapshot
//! - `export`: CSV export of the transaction register
//! - `services`: The `Session` that front ends drive
//! - `audit`: Audit logging system
//! - `cli` / `display`: Command handlers and text formatting for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::models::{Money, TransactionKind};
//! use finance_tracker::services::Session;
//!
//! let mut session = Session::new();
//! session.set_budget(Money::from_cents(50_000))?;
//! let outcome = session.add_transaction(
//!     TransactionKind::Expense,
//!     "Groceries",
//!     Money::from_cents(46_000),
//!     "Food",
//! )?;
//! assert!(outcome.warning.is_some());
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;
pub mod validation;

pub use error::{FinanceError, FinanceResult};
