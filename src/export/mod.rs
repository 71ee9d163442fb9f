//! Export module for the finance tracker
//!
//! CSV export of the ledger, spreadsheet-compatible.

pub mod csv;

pub use self::csv::{
    export_transactions_csv, export_transactions_csv_file, CSV_DATE_FORMAT, CSV_HEADER,
};
