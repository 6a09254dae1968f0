//! Sweep command implementation.
//!
//! Evaluates the investment across a range of redemption exchange rates,
//! prints the curve and writes it as a chart and optionally as CSV.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use fxyield_analytics::{ProfitCurve, ProfitSink, ProfitSweep, RateRange};

use crate::chart::SvgChart;
use crate::cli::{Context, OutputFormat};
use crate::commands::InvestmentArgs;
use crate::config::{Scenario, DEFAULT_CHART_FILE, DEFAULT_SWEEP_STEP, DEFAULT_SWEEP_TO};
use crate::error::CliResult;
use crate::export::CsvSink;
use crate::output::{
    format_amount, format_percent, format_rate, print_csv, print_header, print_json,
    print_output, print_success, print_warning,
};

/// Arguments for the sweep command.
#[derive(Args, Debug)]
pub struct SweepArgs {
    #[command(flatten)]
    pub investment: InvestmentArgs,

    /// First end rate [default: start rate]
    #[arg(long, allow_negative_numbers = true)]
    pub from: Option<f64>,

    /// Last end rate; the sweep stops at the first rate reaching it [default: 150]
    #[arg(long, allow_negative_numbers = true)]
    pub to: Option<f64>,

    /// Increment between end rates [default: 1]
    #[arg(long, allow_negative_numbers = true)]
    pub step: Option<f64>,

    /// Chart output file (SVG) [default: profits_vs_exchange_rate.svg]
    #[arg(long)]
    pub chart: Option<PathBuf>,

    /// Also export the curve as CSV to this file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Do not write a chart
    #[arg(long)]
    pub no_chart: bool,
}

/// Table row for one end rate.
#[derive(Debug, Serialize, Tabled)]
struct SweepRow {
    #[tabled(rename = "End Rate")]
    end_rate: String,
    #[tabled(rename = "Total Return")]
    total_return: String,
    #[tabled(rename = "Profit")]
    profit: String,
    #[tabled(rename = "Profit %")]
    profit_percentage: String,
}

/// A finished sweep and where it should be written.
#[derive(Debug)]
pub struct SweepOutcome {
    pub curve: ProfitCurve,
    pub chart: Option<PathBuf>,
    pub csv: Option<PathBuf>,
}

/// Resolves the inputs and runs the sweep.
pub fn run(args: &SweepArgs, scenario: &Scenario) -> CliResult<SweepOutcome> {
    let position = args.investment.resolve(scenario)?;
    let sweep = &scenario.sweep;

    let range = RateRange::new(
        args.from.or(sweep.from).unwrap_or(position.start_rate),
        args.to.or(sweep.to).unwrap_or(DEFAULT_SWEEP_TO),
        args.step.or(sweep.step).unwrap_or(DEFAULT_SWEEP_STEP),
    )?;
    tracing::info!(
        start = range.start(),
        stop = range.stop(),
        step = range.step(),
        points = range.len(),
        "running profit sweep"
    );

    let curve = ProfitSweep::new(position.investment, position.start_rate, position.bond)
        .run(&range)?;

    let chart = if args.no_chart {
        None
    } else {
        Some(
            args.chart
                .clone()
                .or_else(|| sweep.chart.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CHART_FILE)),
        )
    };
    let csv = args.csv.clone().or_else(|| sweep.csv.clone());

    Ok(SweepOutcome { curve, chart, csv })
}

/// Execute the sweep command.
pub fn execute(args: SweepArgs, scenario: &Scenario, ctx: Context) -> Result<()> {
    if args.no_chart && args.chart.is_some() && !ctx.quiet {
        print_warning("--no-chart given, ignoring --chart");
    }

    let outcome = run(&args, scenario)?;
    let points = outcome.curve.points();

    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header("Profit vs. End Exchange Rate");
            }
            let rows: Vec<SweepRow> = points
                .iter()
                .map(|p| SweepRow {
                    end_rate: format_rate(p.end_rate),
                    total_return: format_amount(p.total_return),
                    profit: format_amount(p.profit),
                    profit_percentage: format_percent(p.profit_percentage),
                })
                .collect();
            print_output(&rows, ctx.format)?;
        }
        OutputFormat::Json => print_json(points)?,
        OutputFormat::Csv => print_csv(points)?,
        OutputFormat::Minimal => {
            for p in points {
                println!("{} {}", p.end_rate, p.profit);
            }
        }
    }

    if let Some(path) = &outcome.chart {
        SvgChart::new().write(&outcome.curve, path)?;
        if !ctx.quiet {
            print_success(&format!("Chart written to {}", path.display()));
        }
    }
    if let Some(path) = &outcome.csv {
        CsvSink.write(&outcome.curve, path)?;
        if !ctx.quiet {
            print_success(&format!("CSV written to {}", path.display()));
        }
    }

    Ok(())
}
