//! CLI command implementations.

pub mod calc;
pub mod sweep;

// Re-export submodules for convenience
pub use calc::CalcArgs;
pub use sweep::SweepArgs;

use clap::Args;

use fxyield_core::BondSpec;

use crate::config::{
    Scenario, DEFAULT_COUPON_RATE, DEFAULT_DURATION_YEARS, DEFAULT_INVESTMENT,
    DEFAULT_NOMINAL_YIELD_RATE, DEFAULT_START_RATE,
};
use crate::error::CliResult;

/// Investment and bond options shared by `calc` and `sweep`.
#[derive(Args, Debug, Clone, Default)]
pub struct InvestmentArgs {
    /// Amount invested, in the investment currency [default: 1000]
    #[arg(short, long, allow_negative_numbers = true)]
    pub investment: Option<f64>,

    /// Exchange rate at purchase, local units per investment unit [default: 37]
    #[arg(short, long, allow_negative_numbers = true)]
    pub start_rate: Option<f64>,

    /// Annual coupon rate in percent [default: 9.85]
    #[arg(long, allow_negative_numbers = true)]
    pub coupon: Option<f64>,

    /// Annual nominal yield rate in percent [default: 19.70]
    #[arg(long, allow_negative_numbers = true)]
    pub nominal_yield: Option<f64>,

    /// Bond duration in years [default: 2.5]
    #[arg(short, long, allow_negative_numbers = true)]
    pub duration: Option<f64>,
}

/// Fully resolved investment: amount, purchase rate and bond.
#[derive(Debug, Clone, Copy)]
pub struct Position {
    pub investment: f64,
    pub start_rate: f64,
    pub bond: BondSpec,
}

impl InvestmentArgs {
    /// Merges flags over the scenario over the built-in defaults.
    ///
    /// The bond goes through the builder, so out-of-range values fail here.
    pub fn resolve(&self, scenario: &Scenario) -> CliResult<Position> {
        let investment = self
            .investment
            .or(scenario.investment)
            .unwrap_or(DEFAULT_INVESTMENT);
        let start_rate = self
            .start_rate
            .or(scenario.start_rate)
            .unwrap_or(DEFAULT_START_RATE);

        let bond = BondSpec::builder()
            .coupon_rate(
                self.coupon
                    .or(scenario.coupon_rate)
                    .unwrap_or(DEFAULT_COUPON_RATE),
            )?
            .nominal_yield_rate(
                self.nominal_yield
                    .or(scenario.nominal_yield_rate)
                    .unwrap_or(DEFAULT_NOMINAL_YIELD_RATE),
            )?
            .duration_years(
                self.duration
                    .or(scenario.duration_years)
                    .unwrap_or(DEFAULT_DURATION_YEARS),
            )?
            .build()?;

        tracing::debug!(investment, start_rate, %bond, "resolved position");

        Ok(Position {
            investment,
            start_rate,
            bond,
        })
    }
}
