//! ensure_dir: Create a directory (and parents) if it does not exist

use std::fs::{self, DirBuilder};
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while ensuring a directory exists
#[derive(Error, Debug)]
pub enum EnsureDirError {
    #[error("Path exists but is not a directory: {0}")]
    NotADirectory(String),

    #[error("Could not create directory {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Result type for directory operations
pub type Result<T> = std::result::Result<T, EnsureDirError>;

/// Make sure `dir` exists as a directory
///
/// Missing parents are created too. `mode` applies to every directory this
/// call creates (Unix only); existing directories keep their permissions.
///
/// # Arguments
/// * `dir` - Directory path
/// * `mode` - Permission bits for newly created directories
///
/// # Returns
/// * `Ok(())` - Directory exists (created or already present)
/// * `Err(EnsureDirError)` - Path is a file, or creation failed
pub fn ensure_dir<P: AsRef<Path>>(dir: P, mode: u32) -> Result<()> {
    let dir = dir.as_ref();

    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => return Ok(()),
        Ok(_) => return Err(EnsureDirError::NotADirectory(dir.display().to_string())),
        Err(_) => {}
    }

    builder(mode)
        .create(dir)
        .map_err(|source| EnsureDirError::Io {
            path: dir.display().to_string(),
            source,
        })?;

    debug!(dir = %dir.display(), mode, "created directory");
    Ok(())
}

#[cfg(unix)]
fn builder(mode: u32) -> DirBuilder {
    use std::os::unix::fs::DirBuilderExt;

    let mut builder = DirBuilder::new();
    builder.recursive(true).mode(mode);
    builder
}

#[cfg(not(unix))]
fn builder(_mode: u32) -> DirBuilder {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    builder
}
