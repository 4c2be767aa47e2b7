//! Startup decisions: CLI overrides and front-end selection.

use crate::cli::Args;
use pseudoterm::config::Config;

/// Which front end drives the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FrontEnd {
    /// Full-screen raw-mode UI with animated effects.
    Interactive,
    /// One command per stdin line, plain output.
    Line,
}

/// Apply CLI flags on top of the loaded config; flags always win.
pub(crate) fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if args.no_color {
        config.display.color = false;
    }
    if let Some(path) = &args.log_file {
        config.logging.file = Some(path.clone());
    }
}

/// Pick line mode when asked to, or when either end is not a terminal.
pub(crate) fn select_front_end(plain: bool, stdin_tty: bool, stdout_tty: bool) -> FrontEnd {
    if plain || !stdin_tty || !stdout_tty {
        FrontEnd::Line
    } else {
        FrontEnd::Interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn cli_flags_override_config() {
        let mut config = Config::default();
        let args = Args::parse_from(["pseudoterm", "--no-color", "--log-file", "/tmp/x.log"]);
        apply_cli_overrides(&mut config, &args);
        assert!(!config.display.color);
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/x.log")));
    }

    #[test]
    fn absent_flags_leave_config_alone() {
        let mut config = Config::default();
        config.logging.file = Some(PathBuf::from("/var/log/pt.log"));
        apply_cli_overrides(&mut config, &Args::parse_from(["pseudoterm"]));
        assert!(config.display.color);
        assert_eq!(config.logging.file, Some(PathBuf::from("/var/log/pt.log")));
    }

    #[test]
    fn line_mode_when_plain_or_piped() {
        assert_eq!(select_front_end(false, true, true), FrontEnd::Interactive);
        assert_eq!(select_front_end(true, true, true), FrontEnd::Line);
        assert_eq!(select_front_end(false, false, true), FrontEnd::Line);
        assert_eq!(select_front_end(false, true, false), FrontEnd::Line);
    }
}
