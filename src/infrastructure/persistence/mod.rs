pub mod csv_history_repository;

pub use csv_history_repository::CsvHistoryRepository;

use crate::domain::errors::PersistenceError;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Atomic write: write to temp file, fsync, then rename over the target.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<(), PersistenceError> {
    let write_failed = |reason: String| PersistenceError::WriteFailed {
        path: path.display().to_string(),
        reason,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| write_failed(e.to_string()))?;
    }

    let temp_path = path.with_extension("tmp");
    let mut file = File::create(&temp_path).map_err(|e| write_failed(e.to_string()))?;
    file.write_all(content)
        .and_then(|_| file.sync_all())
        .map_err(|e| write_failed(e.to_string()))?;
    fs::rename(&temp_path, path).map_err(|e| write_failed(e.to_string()))?;
    Ok(())
}
