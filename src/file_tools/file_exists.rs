//! file_exists: Check whether a path exists
//!
//! Follows symlinks, so a dangling link reports `false`.

use std::path::Path;

/// Returns true if `path` names an existing file or directory
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().metadata().is_ok()
}
