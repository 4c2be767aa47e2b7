//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. CLI flags (`--no-color`, `--log-file`), applied by the binary
//! 2. `PSEUDOTERM_NO_COLOR` (or `NO_COLOR`) environment variable
//! 3. TOML file specified via `--config`
//! 4. `./pseudoterm.toml` in the current directory
//! 5. `$XDG_CONFIG_HOME/pseudoterm/pseudoterm.toml`
//! 6. Built-in defaults
//!
//! Nothing here ever writes to disk.

mod defaults;
mod env;
mod loader;
mod sources;
mod types;

pub use loader::{load_config, load_config_with_source};
pub use types::{
    Config, ConfigSource, DisplayConfig, EffectsConfig, LoadedConfig, LoggingConfig,
};
