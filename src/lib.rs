//! tmos: small filesystem helpers with a fail-fast mode
//!
//! [`file_tools`] propagates every error to the caller. [`fatal`] wraps the
//! same operations for call sites with no recovery path: on error they print
//! a diagnostic to stderr and exit the process with status 1.

pub mod cli;
pub mod config;
pub mod fatal;
pub mod file_tools;
pub mod logging;

// Re-export file tools for convenience
pub use file_tools::{
    ensure_dir, file_copy, file_exists, file_read, file_write, EnsureDirError, FileCopyError,
    FileReadError, FileWriteError,
};

// Re-export fatal helpers
pub use fatal::{exit, must_read_file, must_write_file, OrExit, EXIT_FATAL};
