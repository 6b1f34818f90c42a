//! CLI argument parsing
//!
//! - Modes: copy, write, read, exists, ensure-dir
//! - Options: --mode, --json, --version, --help

use crate::cli::{Error, Result};
use crate::config::parse_mode;

/// Parsed CLI arguments
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// CLI mode (None only when --help/--version stand alone)
    pub mode: Option<Mode>,

    /// Creation mode override (octal on the command line)
    pub file_mode: Option<u32>,

    /// JSON output flag
    pub json_output: bool,

    /// Show version and exit
    pub show_version: bool,

    /// Show help and exit
    pub show_help: bool,
}

/// CLI modes
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Copy a file; errors are reported and mapped to an exit code
    Copy { source: String, dest: String },

    /// Write stdin to a file; exits fatally on error
    Write { path: String },

    /// Print a file to stdout; exits fatally on error
    Read { path: String },

    /// Report whether a path exists
    Exists { path: String },

    /// Create a directory and its parents
    EnsureDir { dir: String },
}

/// Parse CLI arguments from std::env::args()
///
/// Grammar:
/// ```text
/// tmos [options] <mode> [mode-args]
///
/// MODES:
///   copy <src> <dst>     Copy src to dst
///   write <path>         Write stdin to path (fatal on error)
///   read <path>          Print path to stdout (fatal on error)
///   exists <path>        Print whether path exists
///   ensure-dir <dir>     Create dir and parents
///
/// OPTIONS:
///   --mode <octal>       Creation mode for write / ensure-dir
///   --json               Output JSON
///   --version            Show version
///   --help               Show help
/// ```
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args> {
    let mut iter = args.into_iter();
    let _program = iter.next(); // Skip program name

    let mut args_out = Args {
        mode: None,
        file_mode: None,
        json_output: false,
        show_version: false,
        show_help: false,
    };

    let mut positional = Vec::new();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                args_out.show_version = true;
            }
            "--help" | "-h" => {
                args_out.show_help = true;
            }
            "--json" => {
                args_out.json_output = true;
            }
            "--mode" => {
                let raw = iter.next().ok_or_else(|| {
                    Error::MissingArgument("--mode requires an octal value".to_string())
                })?;
                let mode =
                    parse_mode(&raw).map_err(|e| Error::InvalidArgs(format!("--mode: {}", e)))?;
                args_out.file_mode = Some(mode);
            }
            arg if arg.starts_with("--") => {
                return Err(Error::InvalidArgs(format!("Unknown option: {}", arg)));
            }
            other => {
                positional.push(other.to_string());
            }
        }
    }

    if !positional.is_empty() {
        args_out.mode = Some(parse_mode_args(positional)?);
    } else if !args_out.show_help && !args_out.show_version {
        return Err(Error::MissingArgument("expected a mode".to_string()));
    }

    Ok(args_out)
}

fn parse_mode_args(positional: Vec<String>) -> Result<Mode> {
    let mut iter = positional.into_iter();
    let first = iter
        .next()
        .ok_or_else(|| Error::InvalidArgs("Expected mode argument".to_string()))?;

    let mut operand = |what: &str| {
        iter.next()
            .ok_or_else(|| Error::MissingArgument(format!("{} requires {}", first, what)))
    };

    let mode = match first.as_str() {
        "copy" => Mode::Copy {
            source: operand("a source path")?,
            dest: operand("a destination path")?,
        },
        "write" => Mode::Write {
            path: operand("a path")?,
        },
        "read" => Mode::Read {
            path: operand("a path")?,
        },
        "exists" => Mode::Exists {
            path: operand("a path")?,
        },
        "ensure-dir" => Mode::EnsureDir {
            dir: operand("a directory")?,
        },
        other => return Err(Error::UnknownMode(other.to_string())),
    };

    if let Some(extra) = iter.next() {
        return Err(Error::InvalidArgs(format!("Unexpected argument: {}", extra)));
    }

    Ok(mode)
}
