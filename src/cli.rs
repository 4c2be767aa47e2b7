//! CLI argument parsing via clap.

use clap::Parser;
use std::path::PathBuf;

/// A decorative fake terminal with a handful of canned commands.
#[derive(Debug, Parser)]
#[command(name = "pseudoterm", version)]
pub struct Args {
    /// Path to config file (default: ./pseudoterm.toml or ~/.config/pseudoterm/pseudoterm.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Append logs to this file.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Read commands line by line from stdin instead of the full-screen UI.
    #[arg(long = "plain")]
    pub plain: bool,
}
