//! Default configuration constants.
//!
//! Keeping defaults in one module lets the serde `Default` impls and the
//! tests share the same literals.

/// Prompt shown before the input buffer and before echoed commands.
pub(super) const DEFAULT_PROMPT: &str = "visitor@localhost:~$ ";
/// Matrix redraw interval.
pub(super) const DEFAULT_MATRIX_TICK_MS: u64 = 33;
/// Time for the matrix rain to go from ~1% to 100% active columns.
pub(super) const DEFAULT_MATRIX_RAMP_MS: u64 = 5000;
/// Delay between `removing ...` lines in the wipe parody.
pub(super) const DEFAULT_WIPE_STEP_MS: u64 = 150;
/// Default `tracing` filter directive when no env override is present.
pub(super) const DEFAULT_LOG_LEVEL: &str = "info";
/// Local config file name, also used under the global config dir.
pub(super) const CONFIG_FILE_NAME: &str = "pseudoterm.toml";
/// Directory name under the platform config root.
pub(super) const CONFIG_DIR_NAME: &str = "pseudoterm";
