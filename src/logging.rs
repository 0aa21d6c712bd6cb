//! Tracing setup
//!
//! The terminal belongs to the UI, so log records go to a file.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

/// Default log file location
pub const DEFAULT_LOG_PATH: &str = "~/.cinesearch/cinesearch.log";

/// Environment variable overriding the log file location
pub const LOG_FILE_ENV_VAR: &str = "CINESEARCH_LOG_FILE";

/// Environment variable holding an `EnvFilter` directive
pub const LOG_FILTER_ENV_VAR: &str = "CINESEARCH_LOG";

/// Resolve the log file path from the environment or the default
pub fn get_log_path() -> PathBuf {
    let raw = std::env::var_os(LOG_FILE_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_LOG_PATH.to_string());
    PathBuf::from(shellexpand::tilde(&raw).to_string())
}

/// Filter directive used when `CINESEARCH_LOG` is not set
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "cinesearch=debug"
    } else {
        "warn"
    }
}

/// Install the global tracing subscriber writing to the log file
pub fn init_logging(verbose: bool) -> Result<PathBuf> {
    let path = get_log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory '{}'", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file '{}'", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::rfc_3339())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    tracing::info!("Logging initialized at {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_should_enable_debug_for_crate() {
        assert_eq!(default_directive(true), "cinesearch=debug");
        assert_eq!(default_directive(false), "warn");
    }

    #[test]
    fn log_path_should_honor_env_override() {
        let original = std::env::var_os(LOG_FILE_ENV_VAR);

        std::env::set_var(LOG_FILE_ENV_VAR, "/tmp/cinesearch-test.log");
        assert_eq!(get_log_path(), PathBuf::from("/tmp/cinesearch-test.log"));

        match original {
            Some(val) => std::env::set_var(LOG_FILE_ENV_VAR, val),
            None => std::env::remove_var(LOG_FILE_ENV_VAR),
        }
    }
}
