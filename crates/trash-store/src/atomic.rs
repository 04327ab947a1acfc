//! Atomic file writes for list persistence.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{Result, StoreError};

/// Writes data to a file atomically.
///
/// The data goes to a temporary file in the target directory first and is
/// then renamed over the target, so readers never observe a partial list.
///
/// # Errors
/// Returns an error if the directory cannot be created or the write or
/// rename fails.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|source| StoreError::DirectoryError {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    // Same directory keeps the rename on one filesystem
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp_file =
        tempfile::NamedTempFile::new_in(dir).map_err(|source| StoreError::WriteError {
            path: path.to_path_buf(),
            source,
        })?;

    temp_file
        .write_all(data)
        .and_then(|()| temp_file.flush())
        .map_err(|source| StoreError::WriteError {
            path: path.to_path_buf(),
            source,
        })?;

    temp_file
        .persist(path)
        .map_err(|e| StoreError::WriteError {
            path: path.to_path_buf(),
            source: e.error,
        })?;

    Ok(())
}
