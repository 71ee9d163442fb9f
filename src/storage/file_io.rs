//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{FinanceError, FinanceResult};

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> FinanceResult<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    read_existing(path)
}

/// Read JSON from a file that must exist
///
/// A missing file is `NotFound`; a file that is unreadable or does not match
/// the expected shape is `CorruptData`.
pub fn read_json_required<T, P>(path: P) -> FinanceResult<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(FinanceError::snapshot_not_found(path.display().to_string()));
    }

    read_existing(path)
}

fn read_existing<T: DeserializeOwned>(path: &Path) -> FinanceResult<T> {
    let file = File::open(path)
        .map_err(|e| FinanceError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| {
        FinanceError::CorruptData(format!("Failed to parse {}: {}", path.display(), e))
    })
}

/// Write JSON to a file atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> FinanceResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    write_atomic(path, |writer| {
        serde_json::to_writer_pretty(writer, data)
            .map_err(|e| FinanceError::Storage(format!("Failed to serialize data: {}", e)))
    })
}

/// Write a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all. The temp
/// file lives next to the target so the rename stays on one filesystem.
pub fn write_atomic<P, F>(path: P, write_body: F) -> FinanceResult<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> FinanceResult<()>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            FinanceError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path);

    let result = write_temp(&temp_path, write_body).and_then(|()| {
        fs::rename(&temp_path, path)
            .map_err(|e| FinanceError::Storage(format!("Failed to rename temp file: {}", e)))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

fn write_temp<F>(temp_path: &Path, write_body: F) -> FinanceResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> FinanceResult<()>,
{
    let file = File::create(temp_path)
        .map_err(|e| FinanceError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    write_body(&mut writer)?;

    writer
        .flush()
        .map_err(|e| FinanceError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| FinanceError::Storage(format!("Failed to sync data: {}", e)))?;

    Ok(())
}

/// `finance_data.json` -> `finance_data.json.tmp`
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("data"));
    name.push(".tmp");
    path.with_file_name(name)
}
