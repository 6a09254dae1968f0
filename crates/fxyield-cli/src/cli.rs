//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::commands::{CalcArgs, SweepArgs};

/// FxYield - return of a foreign-currency bond under exchange-rate moves
#[derive(Parser)]
#[command(name = "fxyield")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Scenario file (TOML) supplying defaults for omitted options
    #[arg(short, long, global = true, env = "FXYIELD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Calculate return and profit for one redemption exchange rate
    Calc(CalcArgs),

    /// Sweep redemption exchange rates and chart the profit
    Sweep(SweepArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the values)
    Minimal,
}

/// Global settings shared by every command.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    /// Selected output format.
    pub format: OutputFormat,
    /// Whether headers and status lines are suppressed.
    pub quiet: bool,
}
