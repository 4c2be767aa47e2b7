//! Top-level config loading pipeline.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::env::apply_runtime_env_overrides;
use super::sources::{config_root_dir, read_config_text_with_sources};
use super::{Config, LoadedConfig};

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from `--config`).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    Ok(load_config_with_source(path_override)?.config)
}

/// Load configuration and report which source supplied it.
pub fn load_config_with_source(path_override: Option<&str>) -> Result<LoadedConfig, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

pub(super) fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (config_text, source) =
        read_config_text_with_sources(path_override, &read_file, &config_root)?;
    let mut config: Config = toml::from_str(&config_text)?;
    apply_runtime_env_overrides(&mut config, &env_lookup);
    validate(&config)?;
    Ok(LoadedConfig { config, source })
}

/// Reject values that would stall an effect or hide the prompt.
pub(super) fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.display.prompt.is_empty() {
        return Err(ConfigError::Invalid(
            "display.prompt must not be empty".to_string(),
        ));
    }
    if config.effects.matrix_tick_ms == 0 {
        return Err(ConfigError::Invalid(
            "effects.matrix_tick_ms must be at least 1".to_string(),
        ));
    }
    if config.effects.wipe_step_ms == 0 {
        return Err(ConfigError::Invalid(
            "effects.wipe_step_ms must be at least 1".to_string(),
        ));
    }
    if config.logging.level.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "logging.level must not be empty".to_string(),
        ));
    }
    Ok(())
}
