//! CLI mode dispatch
//!
//! `copy`, `exists` and `ensure-dir` report errors and return an exit code.
//! `write` and `read` go through the fatal helpers and never return on a
//! filesystem error.

use std::io::{self, Read, Write};

use serde::Serialize;
use tracing::debug;

use crate::cli::{Args, Mode, Result, EXIT_FAILURE, EXIT_SUCCESS};
use crate::config::{Config, DEFAULT_DIR_MODE};
use crate::fatal::{must_read_file, must_write_file};
use crate::file_tools::{ensure_dir, file_copy, file_exists};

/// Exit code wrapper for CLI operations
pub type ExitCode = i32;

/// Result of a successful `copy`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CopyReport {
    pub source: String,
    pub destination: String,
    pub bytes: u64,
}

/// Run CLI mode and return exit code
///
/// Called from main() after argument parsing and logging setup.
pub fn run_cli_mode(args: Args, config: &Config) -> ExitCode {
    let Some(mode) = args.mode else {
        return EXIT_SUCCESS;
    };

    match run_mode(mode, args.file_mode, args.json_output, config) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            debug!(exit_code = EXIT_FAILURE, "command failed");
            eprintln!("Error: {}", e);
            EXIT_FAILURE
        }
    }
}

fn run_mode(mode: Mode, file_mode: Option<u32>, json: bool, config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match mode {
        Mode::Copy { source, dest } => {
            let bytes = file_copy(&source, &dest)?;
            let report = CopyReport {
                source,
                destination: dest,
                bytes,
            };
            if json {
                writeln!(out, "{}", serde_json::to_string(&report)?)?;
            } else {
                writeln!(
                    out,
                    "copied {} bytes from {} to {}",
                    report.bytes, report.source, report.destination
                )?;
            }
        }
        Mode::Write { path } => {
            let mut data = Vec::new();
            io::stdin().lock().read_to_end(&mut data)?;
            must_write_file(&path, &data, file_mode.unwrap_or(config.default_mode));
        }
        Mode::Read { path } => {
            let data = must_read_file(&path);
            out.write_all(&data)?;
        }
        Mode::Exists { path } => {
            let exists = file_exists(&path);
            if json {
                let value = serde_json::json!({ "path": path, "exists": exists });
                writeln!(out, "{}", value)?;
            } else {
                writeln!(out, "{}", exists)?;
            }
        }
        Mode::EnsureDir { dir } => {
            ensure_dir(&dir, file_mode.unwrap_or(DEFAULT_DIR_MODE))?;
        }
    }

    out.flush()?;
    Ok(())
}
