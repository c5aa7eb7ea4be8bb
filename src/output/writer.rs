// src/output/writer.rs
//! Writes rendered documents to disk.
//!
//! Writes are whole-document overwrites: a re-export always replaces the
//! previous file, and a crash mid-batch leaves earlier books' files
//! intact and the current book's file simply absent or stale.

use crate::error::AppError;
use std::fs;
use std::path::Path;

/// Writes a rendered document, creating parent directories as needed.
/// Returns the number of bytes written.
pub fn write_document(path: &Path, content: &str) -> Result<usize, AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    log::debug!("Writing {} bytes to {}", content.len(), path.display());
    fs::write(path, content)?;

    log::info!("Wrote file: {}", path.display());
    Ok(content.len())
}
