//! Calc command implementation.
//!
//! Calculates total return, profit and profit percentage for one
//! redemption exchange rate.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use fxyield_analytics::{calculate_bond_yield, YieldResult};
use fxyield_core::BondSpec;

use crate::cli::{Context, OutputFormat};
use crate::commands::InvestmentArgs;
use crate::config::Scenario;
use crate::error::CliResult;
use crate::output::{
    format_amount, format_percent, format_rate, print_header, print_json, print_output, KeyValue,
};

/// Arguments for the calc command.
#[derive(Args, Debug)]
pub struct CalcArgs {
    #[command(flatten)]
    pub investment: InvestmentArgs,

    /// Exchange rate at redemption, local units per investment unit.
    /// Defaults to the start rate.
    #[arg(short, long, allow_negative_numbers = true)]
    pub end_rate: Option<f64>,
}

/// Inputs and outcome of one calculation.
#[derive(Debug, Serialize)]
pub struct CalcReport {
    pub investment: f64,
    pub start_rate: f64,
    pub end_rate: f64,
    pub bond: BondSpec,
    pub result: YieldResult,
}

impl CalcReport {
    fn rows(&self) -> Vec<KeyValue> {
        vec![
            KeyValue::new("Investment", format_amount(self.investment)),
            KeyValue::new("Start Rate", format_rate(self.start_rate)),
            KeyValue::new("End Rate", format_rate(self.end_rate)),
            KeyValue::new("Coupon", format_percent(self.bond.coupon_rate())),
            KeyValue::new("Nominal Yield", format_percent(self.bond.nominal_yield_rate())),
            KeyValue::new("Duration (years)", self.bond.duration_years().to_string()),
            KeyValue::new("Total Return", format_amount(self.result.total_return)),
            KeyValue::new("Profit", format_amount(self.result.profit)),
            KeyValue::new("Profit %", format_percent(self.result.profit_percentage)),
        ]
    }
}

/// Resolves the inputs and runs the calculator.
pub fn run(args: &CalcArgs, scenario: &Scenario) -> CliResult<CalcReport> {
    let position = args.investment.resolve(scenario)?;
    let end_rate = args
        .end_rate
        .or(scenario.end_rate)
        .unwrap_or(position.start_rate);

    let result = calculate_bond_yield(
        position.investment,
        position.start_rate,
        end_rate,
        &position.bond,
    )?;
    tracing::info!(end_rate, profit = result.profit, "calculated bond yield");

    Ok(CalcReport {
        investment: position.investment,
        start_rate: position.start_rate,
        end_rate,
        bond: position.bond,
        result,
    })
}

/// Execute the calc command.
pub fn execute(args: CalcArgs, scenario: &Scenario, ctx: Context) -> Result<()> {
    let report = run(&args, scenario)?;

    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header("Bond Yield");
            }
            print_output(&report.rows(), ctx.format)?;
        }
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Csv => print_output(&report.rows(), ctx.format)?,
        OutputFormat::Minimal => {
            println!(
                "{} {} {}",
                report.result.total_return, report.result.profit, report.result.profit_percentage
            );
        }
    }

    Ok(())
}
