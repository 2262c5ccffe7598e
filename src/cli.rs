//! CLI argument parsing via clap.

use clap::Parser;
use std::path::PathBuf;

/// Interactive terminal portfolio.
#[derive(Debug, Parser)]
#[command(name = "termfolio", version)]
pub struct Args {
    /// Path to config file (default: ./termfolio.toml or ~/.config/termfolio/termfolio.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Start in this theme instead of following the terminal preference.
    #[arg(long = "theme", value_parser = ["light", "dark"])]
    pub theme: Option<String>,

    /// Override the repo-list endpoint used by `projects`.
    #[arg(long = "projects-url")]
    pub projects_url: Option<String>,

    /// Write diagnostics here instead of the cache directory.
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}
