//! CLI entry point for pseudoterm.

mod app;
mod cli;

use clap::Parser;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    if let Err(e) = app::entry::run(args).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
