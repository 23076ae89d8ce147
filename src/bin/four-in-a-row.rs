use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use four_in_a_row::session::{Config, Session};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "four-in-a-row", version, about)]
struct Args {}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();
    log::debug!("Command line arguments: {args:?}");

    let config = Config::default();
    log::debug!("Session configuration: {config:?}");

    let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), config);
    let results = session
        .run()
        .with_context(|| "Game session ended unexpectedly")?;
    log::info!("Results: {results:?}");

    Ok(())
}
