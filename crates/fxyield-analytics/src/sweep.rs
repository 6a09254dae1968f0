//! Profit sweep across redemption exchange rates.
//!
//! Holds the investment, start rate and bond fixed, and evaluates the
//! calculator once per end rate of a [`RateRange`]. The resulting
//! [`ProfitCurve`] is handed to a [`ProfitSink`] for charting or export.

use std::path::Path;

use serde::Serialize;

use fxyield_core::{ensure_positive, BondSpec, FxError, FxResult};

use crate::calculator::{calculate_bond_yield, YieldResult};

/// Largest number of points a single sweep may produce.
pub const MAX_SWEEP_POINTS: usize = 1_000_000;

/// An increasing sequence of exchange rates `start, start + step, ...`.
///
/// The sequence is inclusive of `start` and runs until a value equal to or
/// beyond `stop` has been produced, so `37..=150` with step 1 yields 114
/// rates ending at 150.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateRange {
    start: f64,
    stop: f64,
    step: f64,
}

impl RateRange {
    /// Creates a validated range.
    ///
    /// # Errors
    ///
    /// Returns an invalid input error if `start` or `step` is not a finite
    /// positive number, if `stop` is below `start`, or if the range would
    /// produce more than [`MAX_SWEEP_POINTS`] rates.
    pub fn new(start: f64, stop: f64, step: f64) -> FxResult<Self> {
        ensure_positive("sweep start", start)?;
        ensure_positive("sweep step", step)?;
        if !stop.is_finite() || stop < start {
            return Err(FxError::invalid_input(
                "sweep stop",
                stop,
                format!("must be at least the sweep start ({start})"),
            ));
        }

        let range = Self { start, stop, step };
        if range.len() > MAX_SWEEP_POINTS {
            return Err(FxError::invalid_input(
                "sweep step",
                step,
                format!("produces more than {MAX_SWEEP_POINTS} points"),
            ));
        }
        Ok(range)
    }

    /// First rate of the sweep.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Rate the sweep must reach.
    #[must_use]
    pub fn stop(&self) -> f64 {
        self.stop
    }

    /// Increment between consecutive rates.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of rates in the sweep.
    #[must_use]
    pub fn len(&self) -> usize {
        ((self.stop + self.step - self.start) / self.step).ceil() as usize
    }

    /// Always false: a valid range contains at least `start`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the rates in increasing order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| self.start + i as f64 * self.step)
    }
}

/// One evaluated end rate of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    /// Exchange rate at redemption.
    pub end_rate: f64,
    /// Total return in the investment currency.
    pub total_return: f64,
    /// Profit in the investment currency.
    pub profit: f64,
    /// Profit in percent of the investment.
    pub profit_percentage: f64,
}

impl CurvePoint {
    fn new(end_rate: f64, result: YieldResult) -> Self {
        Self {
            end_rate,
            total_return: result.total_return,
            profit: result.profit,
            profit_percentage: result.profit_percentage,
        }
    }
}

/// Profit as a function of the redemption exchange rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfitCurve {
    points: Vec<CurvePoint>,
}

impl ProfitCurve {
    /// Evaluated points, ordered by increasing end rate.
    #[must_use]
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// End rates, aligned with [`profits`](Self::profits).
    #[must_use]
    pub fn end_rates(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.end_rate).collect()
    }

    /// Profits, aligned with [`end_rates`](Self::end_rates).
    #[must_use]
    pub fn profits(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.profit).collect()
    }

    /// Total returns, aligned with [`end_rates`](Self::end_rates).
    #[must_use]
    pub fn total_returns(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.total_return).collect()
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true when the curve has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Evaluates one bond investment over many redemption rates.
#[derive(Debug, Clone, Copy)]
pub struct ProfitSweep {
    investment_amount: f64,
    start_rate: f64,
    bond_spec: BondSpec,
}

impl ProfitSweep {
    /// Creates a sweep for a fixed investment, start rate and bond.
    #[must_use]
    pub fn new(investment_amount: f64, start_rate: f64, bond_spec: BondSpec) -> Self {
        Self {
            investment_amount,
            start_rate,
            bond_spec,
        }
    }

    /// Runs the calculator once per rate in `range`.
    ///
    /// # Errors
    ///
    /// Propagates the calculator's invalid input error; no partial curve is
    /// returned.
    pub fn run(&self, range: &RateRange) -> FxResult<ProfitCurve> {
        log::debug!(
            "sweeping end rate {}..={} step {} for {}",
            range.start(),
            range.stop(),
            range.step(),
            self.bond_spec
        );

        let points = range
            .values()
            .map(|end_rate| {
                calculate_bond_yield(
                    self.investment_amount,
                    self.start_rate,
                    end_rate,
                    &self.bond_spec,
                )
                .map(|result| CurvePoint::new(end_rate, result))
            })
            .collect::<FxResult<Vec<_>>>()?;

        log::debug!("sweep produced {} points", points.len());
        Ok(ProfitCurve { points })
    }
}

/// Destination for a finished profit curve (chart, CSV export, ...).
pub trait ProfitSink {
    /// Error raised while writing.
    type Error;

    /// Persists `curve` to `path`.
    fn write(&self, curve: &ProfitCurve, path: &Path) -> Result<(), Self::Error>;
}
