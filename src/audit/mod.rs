//! Audit logging system for the finance tracker
//!
//! Records every create, update and delete on the session state in an
//! append-only JSON-lines log.
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! logger.log(&AuditEntry::transaction_added(&txn))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
