//! file_copy: Stream one file's contents into another
//!
//! The source is opened before the destination is touched, so a missing or
//! unreadable source never creates a destination file. The destination is
//! created with default permissions (not mirrored from the source).
//!
//! Not atomic: if the transfer fails part way, the partially written
//! destination is left in place.

use std::fs::{self, File};
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during file copy operations
#[derive(Error, Debug)]
pub enum FileCopyError {
    #[error("Failed to open source {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create destination {path}: {source}")]
    Create {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: String,
        to: String,
        #[source]
        source: io::Error,
    },
}

/// Result type for file copy operations
pub type Result<T> = std::result::Result<T, FileCopyError>;

/// Copy `source` to `dest`, creating or truncating `dest`
///
/// Bytes are streamed through a fixed-size buffer, so files of any size can
/// be copied without loading them into memory.
///
/// # Arguments
/// * `source` - Existing regular file to read from
/// * `dest` - File to create or overwrite
///
/// # Returns
/// * `Ok(u64)` - Number of bytes copied
/// * `Err(FileCopyError)` - Which stage failed, with the underlying IO error
///
/// # Examples
/// ```ignore
/// use tmos::file_tools::file_copy;
///
/// let bytes = file_copy("genesis.json", "genesis.json.bak")?;
/// ```
pub fn file_copy<S: AsRef<Path>, D: AsRef<Path>>(source: S, dest: D) -> Result<u64> {
    let source = source.as_ref();
    let dest = dest.as_ref();

    let open_err = |err: io::Error| FileCopyError::Open {
        path: source.display().to_string(),
        source: err,
    };
    let create_err = |err: io::Error| FileCopyError::Create {
        path: dest.display().to_string(),
        source: err,
    };

    let mut reader = File::open(source).map_err(open_err)?;
    if reader.metadata().map_err(open_err)?.is_dir() {
        return Err(open_err(io::Error::new(
            io::ErrorKind::Other,
            "cannot read from directories",
        )));
    }

    // Truncating the destination would destroy the source
    if is_same_file(source, dest) {
        return Err(create_err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "destination is the source file",
        )));
    }

    let mut writer = File::create(dest).map_err(create_err)?;

    let copy_err = |err: io::Error| FileCopyError::Copy {
        from: source.display().to_string(),
        to: dest.display().to_string(),
        source: err,
    };
    let bytes = io::copy(&mut reader, &mut writer).map_err(copy_err)?;
    if writer.metadata().map_err(copy_err)?.is_file() {
        writer.sync_all().map_err(copy_err)?;
    }

    debug!(from = %source.display(), to = %dest.display(), bytes, "copied file");
    Ok(bytes)
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
