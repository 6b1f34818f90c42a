//! file_read: Read entire file into memory
//!
//! Reads raw bytes. Memory use is proportional to file size, so this is meant
//! for small configuration and state files.

use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during file read operations
#[derive(Error, Debug)]
pub enum FileReadError {
    #[error("File not found: {path}")]
    NotFound {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Result type for file read operations
pub type Result<T> = std::result::Result<T, FileReadError>;

/// Read the entire contents of a file
///
/// # Arguments
/// * `path` - Path to the file to read
///
/// # Returns
/// * `Ok(Vec<u8>)` - File contents
/// * `Err(FileReadError)` - File missing, a directory, or unreadable
///
/// # Examples
/// ```ignore
/// use tmos::file_tools::file_read;
///
/// let bytes = file_read("config.toml")?;
/// ```
pub fn file_read<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();

    let data = fs::read(path).map_err(|source| {
        let path = path.display().to_string();
        if source.kind() == io::ErrorKind::NotFound {
            FileReadError::NotFound { path, source }
        } else {
            FileReadError::Io { path, source }
        }
    })?;

    debug!(path = %path.display(), bytes = data.len(), "read file");
    Ok(data)
}
