//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`TERMFOLIO_THEME`, `TERMFOLIO_PROJECTS_URL`,
//!    `TERMFOLIO_FETCH_TIMEOUT_SECS`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./termfolio.toml in the current directory
//! 4. $XDG_CONFIG_HOME/termfolio/termfolio.toml (or ~/.config/termfolio/termfolio.toml)
//! 5. Built-in defaults

mod defaults;
mod env;
mod loader;
mod sources;
mod types;

pub use loader::load_config;
pub use sources::config_root_dir;
pub use types::{Config, DisplayConfig, LinksConfig, ProjectsConfig, ThemeSetting};
