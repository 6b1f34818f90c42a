//! file_write: Create or truncate a file and write bytes with fsync
//!
//! The mode is applied only when the file is created, and is subject to the
//! process umask. Only regular files are fsynced. Not atomic: a failed write
//! can leave a truncated file.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during file write operations
#[derive(Error, Debug)]
pub enum FileWriteError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Result type for file write operations
pub type Result<T> = std::result::Result<T, FileWriteError>;

/// Write `data` to `path`, creating the file with `mode` if absent
///
/// # Arguments
/// * `path` - Path to the file to write
/// * `data` - Bytes to write; replaces any previous content
/// * `mode` - Permission bits used if the file is created (Unix only)
///
/// # Returns
/// * `Ok(())` - Success
/// * `Err(FileWriteError)` - Open, write or sync failed
///
/// # Examples
/// ```ignore
/// use tmos::file_tools::file_write;
///
/// file_write("node_key.json", b"{}", 0o600)?;
/// ```
pub fn file_write<P: AsRef<Path>>(path: P, data: &[u8], mode: u32) -> Result<()> {
    let path = path.as_ref();
    let wrap = |source: io::Error| FileWriteError::Io {
        path: path.display().to_string(),
        source,
    };

    let mut file = open_for_write(path, mode).map_err(wrap)?;
    file.write_all(data).map_err(wrap)?;
    // Device files and pipes reject fsync with EINVAL after a complete write
    if file.metadata().map_err(wrap)?.is_file() {
        file.sync_all().map_err(wrap)?;
    }

    debug!(path = %path.display(), bytes = data.len(), mode, "wrote file");
    Ok(())
}

#[cfg(unix)]
fn open_for_write(path: &Path, mode: u32) -> io::Result<std::fs::File> {
    use std::os::unix::fs::OpenOptionsExt;

    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(mode)
        .open(path)
}

#[cfg(not(unix))]
fn open_for_write(path: &Path, _mode: u32) -> io::Result<std::fs::File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}
