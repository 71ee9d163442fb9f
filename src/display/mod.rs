//! Terminal display formatting
//!
//! Plain-text rendering of registers, summaries and category lists used by
//! the CLI handlers.

pub mod category;
pub mod report;
pub mod transaction;

pub use category::{format_category_lists, format_category_menu};
pub use report::{format_budget_status, format_summary};
pub use transaction::{format_transaction_register, format_transaction_row};
