//! Environment overrides applied on top of file configuration.

use crate::error::ConfigError;

use super::{Config, ThemeSetting};

pub(super) fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(theme) = env_lookup("TERMFOLIO_THEME") {
        config.display.theme = ThemeSetting::parse(&theme).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "invalid TERMFOLIO_THEME value `{theme}`: expected auto, light, or dark"
            ))
        })?;
    }
    if let Some(url) = env_lookup("TERMFOLIO_PROJECTS_URL") {
        config.projects.endpoint = url;
    }
    if let Some(timeout) = env_lookup("TERMFOLIO_FETCH_TIMEOUT_SECS") {
        // Clamp to at least 1 second to avoid "no-timeout" accidental behavior.
        let parsed = timeout.parse::<u64>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid TERMFOLIO_FETCH_TIMEOUT_SECS value `{timeout}`: expected positive integer seconds"
            ))
        })?;
        config.projects.timeout_secs = parsed.max(1);
    }
    Ok(())
}
