//! Runtime configuration
//!
//! Settings come from built-in defaults, overridden by environment variables:
//!
//! - `TMOS_DEFAULT_MODE`: octal creation mode for `write` (e.g. `600`, `0o640`)
//! - `TMOS_LOG`: tracing filter directive used when `RUST_LOG` is unset

use anyhow::{anyhow, Context, Result};

/// Environment variable overriding [`Config::default_mode`]
pub const ENV_DEFAULT_MODE: &str = "TMOS_DEFAULT_MODE";

/// Environment variable overriding [`Config::log_filter`]
pub const ENV_LOG: &str = "TMOS_LOG";

/// Mode for files created without an explicit `--mode`
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Mode for directories created by `ensure-dir` without an explicit `--mode`
pub const DEFAULT_DIR_MODE: u32 = 0o755;

/// tmos configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Creation mode for files written by the CLI
    pub default_mode: u32,

    /// Default tracing filter
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_mode: DEFAULT_FILE_MODE,
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by `lookup`, which maps variable names to values
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_DEFAULT_MODE) {
            config.default_mode =
                parse_mode(&raw).with_context(|| format!("Invalid {}", ENV_DEFAULT_MODE))?;
        }

        if let Some(filter) = lookup(ENV_LOG) {
            if !filter.trim().is_empty() {
                config.log_filter = filter;
            }
        }

        Ok(config)
    }
}

/// Parse an octal permission value such as `644`, `0644` or `0o644`
pub fn parse_mode(raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix("0o")
        .or_else(|| trimmed.strip_prefix("0O"))
        .unwrap_or(trimmed);

    if digits.is_empty() {
        return Err(anyhow!("empty mode"));
    }

    let mode = u32::from_str_radix(digits, 8)
        .map_err(|e| anyhow!("'{}' is not an octal mode: {}", raw, e))?;

    if mode > 0o7777 {
        return Err(anyhow!("mode {:o} is out of range", mode));
    }

    Ok(mode)
}
