// src/storage/mod.rs

pub(crate) mod fs_utils;

use crate::codec::{CodecOptions, LoadedRoster, TableCodec};
use crate::errors::{AppError, AppResult};
use crate::models::Student;
use std::fs;
use std::io;
use std::path::Path;

pub(crate) use fs_utils::ensure_writable;

/// Reads a roster file in one go and decodes it.
///
/// The file handle is released before decoding starts. Rows that fail to
/// decode come back as diagnostics; only I/O failure is an error.
pub fn read_file(path: &Path, options: CodecOptions) -> AppResult<LoadedRoster> {
    let bytes = fs::read(path).map_err(|e| {
        AppError::from(io::Error::new(
            e.kind(),
            format!("could not read roster file {}: {e}", path.display()),
        ))
    })?;
    let text = String::from_utf8_lossy(&bytes);

    let loaded = TableCodec::new(options).deserialize(&text)?;
    log::info!(
        "Loaded {} students from {} ({} rows skipped)",
        loaded.students.len(),
        path.display(),
        loaded.skipped()
    );
    Ok(loaded)
}

/// Encodes every student, then replaces `path` with the result.
///
/// Nothing touches the disk until the whole text has been built.
pub fn write_file(path: &Path, students: &[Student], options: CodecOptions) -> AppResult<()> {
    let text = TableCodec::new(options).serialize(students)?;
    fs_utils::replace_file(path, text.as_bytes())?;
    log::info!("Saved {} students to {}", students.len(), path.display());
    Ok(())
}
