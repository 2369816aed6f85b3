//! Text file operations
//!
//! Whole-file read/write plus keyword search and deletion for a single file
//! identified by path. A missing file is a normal outcome for `read`,
//! `search`, and `delete`; every other I/O failure propagates with the
//! offending path attached.

use crate::error::FileError;
use log::debug;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

type Result<T> = std::result::Result<T, FileError>;

fn io_error(path: &Path, source: std::io::Error) -> FileError {
    FileError::Io {
        path: path.to_string_lossy().to_string(),
        source,
    }
}

/// Read the entire file as text.
///
/// Returns `Ok(None)` if the file does not exist. Other I/O failures
/// (permissions, unreadable content) return `Err`.
pub fn read<P: AsRef<Path>>(path: P) -> Result<Option<String>> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("File not found: {}", path.display());
            Ok(None)
        }
        Err(e) => Err(io_error(path, e)),
    }
}

/// Write `content` to the file, creating it if absent.
///
/// Truncates and overwrites by default; appends when `append` is true.
/// I/O failures (disk full, permission denied) propagate to the caller.
pub fn write<P: AsRef<Path>>(path: P, content: &str, append: bool) -> Result<()> {
    let path = path.as_ref();
    let mut file = OpenOptions::new()
        .create(true)
        .append(append)
        .write(true)
        .truncate(!append)
        .open(path)
        .map_err(|e| io_error(path, e))?;

    file.write_all(content.as_bytes())
        .map_err(|e| io_error(path, e))?;

    debug!("Content written to {}", path.display());
    Ok(())
}

/// Search the file for a keyword, line by line.
///
/// Returns the 1-based line number of every line containing `keyword` as a
/// case-sensitive substring. A missing file or an absent keyword yields an
/// empty vector, not an error.
pub fn search<P: AsRef<Path>>(path: P, keyword: &str) -> Result<Vec<usize>> {
    let content = match read(path)? {
        Some(content) => content,
        None => return Ok(Vec::new()),
    };

    Ok(content
        .lines()
        .enumerate()
        .filter(|(_, line)| line.contains(keyword))
        .map(|(i, _)| i + 1)
        .collect())
}

/// Delete the file if it exists.
///
/// Returns `Ok(true)` when the file was removed and `Ok(false)` when there
/// was nothing to remove. Other I/O failures propagate.
pub fn delete<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();
    match fs::remove_file(path) {
        Ok(()) => {
            debug!("File deleted: {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("File not found: {}", path.display());
            Ok(false)
        }
        Err(e) => Err(io_error(path, e)),
    }
}
