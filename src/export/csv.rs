//! CSV Export functionality
//!
//! Writes the ledger as `Type,Description,Amount,Category,Date`, one row per
//! transaction in ledger order. The header text and column order are a
//! user-facing contract.

use std::io::Write;
use std::path::Path;

use csv::{Terminator, WriterBuilder};

use crate::error::{FinanceError, FinanceResult};
use crate::models::Transaction;
use crate::storage::write_atomic;

/// Header row of the transaction export
pub const CSV_HEADER: [&str; 5] = ["Type", "Description", "Amount", "Category", "Date"];

/// Timestamp format used in the Date column (RFC 3339, UTC, whole seconds)
pub const CSV_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Export transactions to any writer
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> FinanceResult<()> {
    let mut csv_writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER).map_err(export_error)?;

    for txn in transactions {
        let amount = txn.amount().to_decimal_string();
        let date = txn.timestamp().format(CSV_DATE_FORMAT).to_string();

        csv_writer
            .write_record([
                txn.kind().label(),
                txn.description(),
                amount.as_str(),
                txn.category(),
                date.as_str(),
            ])
            .map_err(export_error)?;
    }

    csv_writer
        .flush()
        .map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}

/// Export transactions to a file, replacing it atomically
pub fn export_transactions_csv_file(
    path: &Path,
    transactions: &[Transaction],
) -> FinanceResult<()> {
    write_atomic(path, |writer| export_transactions_csv(transactions, writer))
}

fn export_error(err: csv::Error) -> FinanceError {
    FinanceError::Export(err.to_string())
}
