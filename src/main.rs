//! tmos CLI
//!
//! Thin command-line front end over the library:
//! - copy / exists / ensure-dir report errors with exit code 1
//! - write / read use the fatal helpers (exit code 1 on any filesystem error)
//! - bad arguments or configuration exit with code 2

use tmos::cli::{parse_args, run_cli_mode, EXIT_USAGE};
use tmos::config::Config;
use tmos::logging::init_logging;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let parsed = match parse_args(args) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run 'tmos --help' for usage.");
            std::process::exit(EXIT_USAGE);
        }
    };

    if parsed.show_version {
        println!("tmos v{}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if parsed.show_help {
        print_help();
        return;
    }

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(EXIT_USAGE);
        }
    };

    init_logging(&config.log_filter);

    let exit_code = run_cli_mode(parsed, &config);
    std::process::exit(exit_code);
}

fn print_help() {
    println!("tmos: filesystem helpers with fail-fast semantics");
    println!();
    println!("USAGE:");
    println!("  tmos [options] <mode> [mode-args]");
    println!();
    println!("MODES:");
    println!("  copy <src> <dst>     Copy src to dst (exit 1 on error)");
    println!("  write <path>         Write stdin to path (exit 1 on error)");
    println!("  read <path>          Print path to stdout (exit 1 on error)");
    println!("  exists <path>        Print true/false");
    println!("  ensure-dir <dir>     Create dir and parents");
    println!();
    println!("OPTIONS:");
    println!("  --mode <octal>       Creation mode for write / ensure-dir");
    println!("  --json               JSON output for copy / exists");
    println!("  --version, -v        Show version");
    println!("  --help, -h           Show this help");
    println!();
    println!("ENVIRONMENT:");
    println!("  TMOS_DEFAULT_MODE    Default creation mode for write (default 644)");
    println!("  TMOS_LOG             Log filter when RUST_LOG is unset (default warn)");
}
