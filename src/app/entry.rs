//! Application entry orchestration for the pseudoterm binary.

use crate::app::interactive::run_interactive;
use crate::app::startup::{apply_cli_overrides, select_front_end, FrontEnd};
use crate::cli::Args;
use pseudoterm::config::load_config_with_source;
use pseudoterm::error::AppError;
use pseudoterm::line_mode::run_lines;
use pseudoterm::logging::init_logging;
use pseudoterm::session::Session;
use std::io::{self, IsTerminal};
use tracing::info;

/// Load config, install logging, and run the selected front end.
pub(crate) async fn run(args: Args) -> Result<(), AppError> {
    let loaded = load_config_with_source(args.config.as_deref())?;
    let mut config = loaded.config;
    apply_cli_overrides(&mut config, &args);

    let front_end = select_front_end(
        args.plain,
        io::stdin().is_terminal(),
        io::stdout().is_terminal(),
    );
    init_logging(&config.logging, front_end == FrontEnd::Line)?;
    info!(
        source = %loaded.source.describe(),
        ?front_end,
        color = config.display.color,
        "starting pseudoterm"
    );

    match front_end {
        FrontEnd::Interactive => run_interactive(&config).await,
        FrontEnd::Line => {
            let mut session = Session::new();
            let stdin = io::stdin();
            let mut stdout = io::stdout().lock();
            run_lines(&mut session, stdin.lock(), &mut stdout, &config.display.prompt)?;
            Ok(())
        }
    }
}
