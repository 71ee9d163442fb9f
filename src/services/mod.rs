//! Business logic layer
//!
//! The session service ties the ledger, the category registry, persistence
//! and the audit log together behind one command surface.

pub mod session;

pub use session::{LoadStatus, Session};
