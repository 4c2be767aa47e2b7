//! Configuration data model.
//!
//! Struct/enum definitions plus default values. Source discovery and
//! precedence live in `sources`, `env`, and `loader`.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::defaults::{
    DEFAULT_LOG_LEVEL, DEFAULT_MATRIX_RAMP_MS, DEFAULT_MATRIX_TICK_MS, DEFAULT_PROMPT,
    DEFAULT_WIPE_STEP_MS,
};

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub display: DisplayConfig,
    pub effects: EffectsConfig,
    pub logging: LoggingConfig,
}

/// Terminal presentation settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Emit ANSI colors.
    pub color: bool,
    /// Prompt rendered before the input buffer.
    pub prompt: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

/// Cosmetic timing knobs for the visual effects.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct EffectsConfig {
    pub matrix_tick_ms: u64,
    pub matrix_ramp_ms: u64,
    pub wipe_step_ms: u64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            matrix_tick_ms: DEFAULT_MATRIX_TICK_MS,
            matrix_ramp_ms: DEFAULT_MATRIX_RAMP_MS,
            wipe_step_ms: DEFAULT_WIPE_STEP_MS,
        }
    }
}

impl EffectsConfig {
    pub fn matrix_tick(&self) -> Duration {
        Duration::from_millis(self.matrix_tick_ms)
    }

    pub fn matrix_ramp(&self) -> Duration {
        Duration::from_millis(self.matrix_ramp_ms)
    }

    pub fn wipe_step(&self) -> Duration {
        Duration::from_millis(self.wipe_step_ms)
    }
}

/// Log output settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Append logs to this file. Without it the TUI logs nothing.
    pub file: Option<PathBuf>,
    /// `tracing` filter directive, e.g. `info` or `pseudoterm=debug`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Where the effective config text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Config loaded from explicit `--config` path.
    Explicit(PathBuf),
    /// Config loaded from `./pseudoterm.toml`.
    Local,
    /// Config loaded from the per-user config directory.
    Global(PathBuf),
    /// No file found; built-in defaults were used.
    BuiltInDefaults,
}

impl ConfigSource {
    /// Human-readable label used in startup logging.
    pub fn describe(&self) -> String {
        match self {
            Self::Explicit(path) | Self::Global(path) => path.display().to_string(),
            Self::Local => "./pseudoterm.toml".to_string(),
            Self::BuiltInDefaults => "built-in defaults".to_string(),
        }
    }
}

/// Loaded config plus the source it was read from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}
