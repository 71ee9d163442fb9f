//! Append-only JSON-lines audit log

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use crate::error::{FinanceError, FinanceResult};

use super::entry::AuditEntry;

/// Writes and reads the audit log file
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry and flush it before returning
    ///
    /// Callers log before they commit, so an error here means the change
    /// must not be applied.
    pub fn log(&self, entry: &AuditEntry) -> FinanceResult<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| FinanceError::Io(format!("Failed to open audit log: {}", e)))?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, entry)?;
        writer
            .write_all(b"\n")
            .and_then(|()| writer.flush())
            .map_err(|e| FinanceError::Io(format!("Failed to write audit entry: {}", e)))
    }

    /// Every entry in the log, oldest first; an absent log is empty
    pub fn read_all(&self) -> FinanceResult<Vec<AuditEntry>> {
        let file = match File::open(&self.log_path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(FinanceError::Io(format!("Failed to open audit log: {}", e)));
            }
        };

        serde_json::Deserializer::from_reader(BufReader::new(file))
            .into_iter::<AuditEntry>()
            .enumerate()
            .map(|(index, entry)| {
                entry.map_err(|e| {
                    FinanceError::CorruptData(format!(
                        "audit log entry {}: {}",
                        index + 1,
                        e
                    ))
                })
            })
            .collect()
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> FinanceResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::{EntityType, Operation};
    use crate::models::{Money, TransactionKind};
    use std::fs;
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("audit.log");
        (AuditLogger::new(log_path), temp_dir)
    }

    #[test]
    fn test_log_and_read_back() {
        let (logger, temp) = create_test_logger();
        logger
            .log(&AuditEntry::budget_changed(Money::zero(), Money::from_cents(30000)))
            .unwrap();
        logger
            .log(&AuditEntry::category_added(TransactionKind::Expense, "Pets"))
            .unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].entity_type, EntityType::Budget);
        assert_eq!(entries[1].operation, Operation::Create);

        let raw = fs::read_to_string(temp.path().join("audit.log")).unwrap();
        assert_eq!(raw.lines().count(), 2);
    }

    #[test]
    fn test_read_recent_keeps_order() {
        let (logger, _temp) = create_test_logger();
        for i in 0..10 {
            logger
                .log(&AuditEntry::category_added(
                    TransactionKind::Income,
                    &format!("Client {}", i),
                ))
                .unwrap();
        }

        let recent = logger.read_recent(3).unwrap();
        let names: Vec<_> = recent.iter().map(|e| e.summary.as_str()).collect();
        assert_eq!(names, ["Client 7", "Client 8", "Client 9"]);
        assert_eq!(logger.read_recent(50).unwrap().len(), 10);
    }

    #[test]
    fn test_missing_log_is_empty() {
        let (logger, _temp) = create_test_logger();
        assert!(logger.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_garbled_line_is_corrupt_data() {
        let (logger, temp) = create_test_logger();
        logger
            .log(&AuditEntry::category_added(TransactionKind::Income, "Tips"))
            .unwrap();
        let mut file = OpenOptions::new()
            .append(true)
            .open(temp.path().join("audit.log"))
            .unwrap();
        writeln!(file, "not json").unwrap();

        assert!(matches!(
            logger.read_all(),
            Err(FinanceError::CorruptData(_))
        ));
    }

    #[test]
    fn test_unwritable_log_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().to_path_buf());

        let err = logger
            .log(&AuditEntry::category_added(TransactionKind::Income, "Tips"))
            .unwrap_err();
        assert!(matches!(err, FinanceError::Io(_)));
    }
}
