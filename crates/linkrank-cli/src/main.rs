//! Linkrank CLI
//!
//! PageRank for a directory of linked HTML pages.

use clap::Parser;
use linkrank_core::error::exit_codes;
use linkrank_core::LinkRankError;
use tracing_subscriber::EnvFilter;

mod app;
mod commands;
mod output;

use app::Cli;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so ranking output stays machine-readable
    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = commands::rank::run(&cli) {
        eprintln!("Error: {:#}", err);
        let code = err
            .downcast_ref::<LinkRankError>()
            .map(LinkRankError::exit_code)
            .unwrap_or(exit_codes::GENERAL_ERROR);
        std::process::exit(code);
    }
}
