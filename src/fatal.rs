//! Fatal error paths
//!
//! Some call sites have nothing sensible to do when the filesystem fails,
//! e.g. writing the configuration a node needs before it can start. For those,
//! [`OrExit::or_exit`] turns any `Result` into its value or a process exit.
//!
//! ## Contract
//!
//! - Diagnostic goes to stderr once, as `<context>: <error>`
//! - Process exits with [`EXIT_FATAL`]
//! - Nothing after the exit runs; the transition is one-way

use std::fmt::Display;
use std::path::Path;

use tracing::debug;

use crate::file_tools::{file_read, file_write};

/// Exit status used for every fatal error path
pub const EXIT_FATAL: i32 = 1;

/// Print `message` to stderr and terminate the process with [`EXIT_FATAL`]
pub fn exit<M: Display>(message: M) -> ! {
    debug!(exit_code = EXIT_FATAL, "exiting after fatal error");
    eprintln!("{}", message);
    std::process::exit(EXIT_FATAL)
}

/// Abort-on-error combinator
///
/// ```ignore
/// use tmos::fatal::OrExit;
///
/// let genesis = tmos::file_tools::file_read("genesis.json").or_exit("loading genesis");
/// ```
pub trait OrExit<T> {
    /// Unwrap the value, or report `context` with the error and exit
    fn or_exit(self, context: &str) -> T;
}

impl<T, E: Display> OrExit<T> for Result<T, E> {
    fn or_exit(self, context: &str) -> T {
        match self {
            Ok(value) => value,
            Err(err) => exit(format!("{}: {}", context, err)),
        }
    }
}

/// Write `data` to `path` (created with `mode`), or exit the process
pub fn must_write_file<P: AsRef<Path>>(path: P, data: &[u8], mode: u32) {
    file_write(path, data, mode).or_exit("must_write_file failed")
}

/// Read all of `path`, or exit the process
pub fn must_read_file<P: AsRef<Path>>(path: P) -> Vec<u8> {
    file_read(path).or_exit("must_read_file failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_exit_passes_ok_value_through() {
        let result: Result<u32, String> = Ok(7);
        assert_eq!(result.or_exit("unused"), 7);
    }

    #[test]
    fn test_must_round_trip() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("state.json");

        must_write_file(&path, b"{\"height\":1}", 0o644);
        assert_eq!(must_read_file(&path), b"{\"height\":1}");
    }
}
