//! File tools: filesystem operations that propagate errors
//!
//! All operations use the REAL filesystem. Callers that have no recovery path
//! wrap these with [`crate::fatal`] instead of handling the error.

mod ensure_dir;
mod file_copy;
mod file_exists;
mod file_read;
mod file_write;

// Re-export all file tools
pub use ensure_dir::{ensure_dir, EnsureDirError};
pub use file_copy::{file_copy, FileCopyError};
pub use file_exists::file_exists;
pub use file_read::{file_read, FileReadError};
pub use file_write::{file_write, FileWriteError};
