//! FxYield CLI - return of a foreign-currency bond under exchange-rate moves.
//!
//! # Usage
//!
//! ```bash
//! # Return and profit when the rate moves from 37 to 50
//! fxyield calc --investment 1000 --start-rate 37 --end-rate 50 \
//!     --coupon 9.85 --nominal-yield 19.70 --duration 2.5
//!
//! # Sweep end rates 37..=150 and chart the profit
//! fxyield sweep --to 150 --step 1 --chart profits.svg --csv profits.csv
//!
//! # Read defaults from a scenario file
//! fxyield --config scenario.toml sweep
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod chart;
mod cli;
mod commands;
mod config;
mod error;
mod export;
mod output;

use cli::{Cli, Commands, Context};
use config::Scenario;

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let scenario = Scenario::load(cli.config.as_deref())?;
    let ctx = Context {
        format: cli.format,
        quiet: cli.quiet,
    };

    // Execute command
    match cli.command {
        Commands::Calc(args) => commands::calc::execute(args, &scenario, ctx)?,
        Commands::Sweep(args) => commands::sweep::execute(args, &scenario, ctx)?,
    }

    Ok(())
}
