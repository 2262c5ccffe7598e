//! Default configuration constants.
//!
//! Keeping defaults in one module lets the data model and the tests share the
//! same literals.

/// Repo-list endpoint for the `projects` command.
pub(super) const DEFAULT_PROJECTS_ENDPOINT: &str = "https://api.github.com/users/SatireSage/repos";
/// Default timeout for the repo-list request.
pub(super) const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 20;
/// GitHub rejects API requests without a user agent.
pub(super) const DEFAULT_USER_AGENT: &str = concat!("termfolio/", env!("CARGO_PKG_VERSION"));
/// Surfaces narrower than this omit the ASCII-art banner.
pub(super) const DEFAULT_COMPACT_COLUMNS: u16 = 90;

pub(super) const DEFAULT_RESUME_LIGHT_URL: &str = "http://resume.sahajs.com";
pub(super) const DEFAULT_RESUME_DARK_URL: &str = "http://resume.dark.sahajs.com";
pub(super) const DEFAULT_EMAIL_URL: &str = "mailto:sahaj_singh@sfu.ca";
pub(super) const DEFAULT_WEBSITE_URL: &str = "https://sahajs.com";
pub(super) const DEFAULT_GITHUB_URL: &str = "http://github.sahajs.com";
pub(super) const DEFAULT_LINKEDIN_URL: &str = "http://linkedin.sahajs.com";
