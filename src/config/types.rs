//! Configuration data model.
//!
//! This module holds struct/enum definitions plus default values. Loading and
//! source precedence stay in `config::mod`.

use serde::{Deserialize, Serialize};

use super::defaults::{
    DEFAULT_COMPACT_COLUMNS, DEFAULT_EMAIL_URL, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_GITHUB_URL,
    DEFAULT_LINKEDIN_URL, DEFAULT_PROJECTS_ENDPOINT, DEFAULT_RESUME_DARK_URL,
    DEFAULT_RESUME_LIGHT_URL, DEFAULT_USER_AGENT, DEFAULT_WEBSITE_URL,
};
use crate::ui::theme::Theme;

/// Initial theme selection.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSetting {
    /// Follow the platform color-scheme preference.
    #[default]
    Auto,
    Light,
    Dark,
}

impl ThemeSetting {
    /// Theme pinned by this setting, or `None` for `auto`.
    pub fn forced(self) -> Option<Theme> {
        match self {
            Self::Auto => None,
            Self::Light => Some(Theme::Light),
            Self::Dark => Some(Theme::Dark),
        }
    }

    /// Parse `auto` / `light` / `dark`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            other => Theme::parse(other).map(Self::from),
        }
    }
}

impl From<Theme> for ThemeSetting {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::Light,
            Theme::Dark => Self::Dark,
        }
    }
}

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub display: DisplayConfig,
    pub projects: ProjectsConfig,
    pub links: LinksConfig,
}

/// Surface presentation settings under `[display]`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub theme: ThemeSetting,
    pub compact_columns: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: ThemeSetting::Auto,
            compact_columns: DEFAULT_COMPACT_COLUMNS,
        }
    }
}

/// Repo-list collaborator settings under `[projects]`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectsConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_PROJECTS_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Link destinations under `[links]`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LinksConfig {
    pub resume_light: String,
    pub resume_dark: String,
    pub email: String,
    pub website: String,
    pub github: String,
    pub linkedin: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            resume_light: DEFAULT_RESUME_LIGHT_URL.to_string(),
            resume_dark: DEFAULT_RESUME_DARK_URL.to_string(),
            email: DEFAULT_EMAIL_URL.to_string(),
            website: DEFAULT_WEBSITE_URL.to_string(),
            github: DEFAULT_GITHUB_URL.to_string(),
            linkedin: DEFAULT_LINKEDIN_URL.to_string(),
        }
    }
}

impl LinksConfig {
    /// Resume destination for the active theme.
    pub fn resume_for(&self, theme: Theme) -> &str {
        match theme {
            Theme::Dark => &self.resume_dark,
            Theme::Light => &self.resume_light,
        }
    }
}
