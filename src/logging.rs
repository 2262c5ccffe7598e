//! File-backed tracing setup.
//!
//! The session owns the terminal in raw mode, so diagnostics never go to
//! stdout/stderr. Everything is written to a log file instead, truncated on
//! startup.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directive.
pub const LOG_FILTER_ENV: &str = "TERMFOLIO_LOG";
const DEFAULT_FILTER: &str = "info";

/// `<cache_dir>/termfolio/termfolio.log`, when the platform has a cache dir.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("termfolio").join("termfolio.log"))
}

/// Explicit path wins over the platform default.
pub fn resolve_log_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(default_log_path)
}

/// Parse a filter directive, falling back to `info` when absent or invalid.
pub fn build_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to the resolved log file.
///
/// Returns the log path in use, or `None` when no path could be resolved and
/// logging stays disabled.
pub fn init_logging(explicit: Option<&Path>) -> std::io::Result<Option<PathBuf>> {
    let Some(path) = resolve_log_path(explicit) else {
        return Ok(None);
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(&path)?;
    let directive = std::env::var(LOG_FILTER_ENV).ok();

    // A subscriber installed earlier (tests, embedding hosts) stays in place.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(directive.as_deref()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
    Ok(Some(path))
}
