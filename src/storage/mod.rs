//! Storage layer for the finance tracker
//!
//! Provides the JSON snapshot codec on top of atomic file writes.

pub mod file_io;
pub mod snapshot;

pub use file_io::{read_json, read_json_required, write_atomic, write_json_atomic};
pub use snapshot::{load_snapshot, save_snapshot, Snapshot, SNAPSHOT_SCHEMA_VERSION};
