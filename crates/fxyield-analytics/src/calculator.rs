//! Return and profit of a bond bought in a foreign currency.
//!
//! The investment is converted into the bond's local currency at the start
//! rate, earns simple (non-compounding) coupon and nominal yield over the
//! bond's duration, and is converted back at the end rate.
//!
//! Exchange rates are quoted as units of local currency per unit of the
//! investment currency.

use serde::Serialize;

use fxyield_core::{ensure_positive, BondSpec, FxResult};

/// Outcome of a single bond investment, in the investment currency.
///
/// Only [`calculate_bond_yield`] produces these.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[non_exhaustive]
pub struct YieldResult {
    /// Principal plus all income, converted back at the end rate.
    pub total_return: f64,
    /// `total_return - investment_amount`.
    pub profit: f64,
    /// Profit relative to the investment, in percent.
    pub profit_percentage: f64,
}

/// Converts `amount` using a multiplicative `rate`.
#[must_use]
pub fn convert_currency(amount: f64, rate: f64) -> f64 {
    amount * rate
}

/// Coupon paid per year on a local-currency principal.
#[must_use]
pub fn annual_coupon_payment(investment_local: f64, coupon_rate: f64) -> f64 {
    investment_local * coupon_rate / 100.0
}

/// Sum of all coupons paid over the bond's life.
#[must_use]
pub fn total_coupon_payments(annual_coupon: f64, duration_years: f64) -> f64 {
    annual_coupon * duration_years
}

/// Nominal yield accumulated additively over the bond's life.
#[must_use]
pub fn nominal_yield(investment_local: f64, nominal_yield_rate: f64, duration_years: f64) -> f64 {
    investment_local * nominal_yield_rate / 100.0 * duration_years
}

/// Calculates total return, profit and profit percentage of a bond investment.
///
/// # Arguments
///
/// * `investment_amount` - Amount invested, in the investment currency
/// * `start_rate` - Exchange rate at purchase (local per investment unit)
/// * `end_rate` - Exchange rate at redemption (local per investment unit)
/// * `bond_spec` - Coupon, nominal yield and duration of the bond
///
/// # Errors
///
/// Returns [`FxError::InvalidInput`](fxyield_core::FxError::InvalidInput) if
/// the investment amount or either exchange rate is not a finite positive
/// number. Nothing is computed before the inputs are checked.
///
/// # Example
///
/// ```rust
/// use fxyield_analytics::calculate_bond_yield;
/// use fxyield_core::BondSpec;
///
/// let spec = BondSpec::builder()
///     .coupon_rate(9.85)?
///     .nominal_yield_rate(19.70)?
///     .duration_years(2.5)?
///     .build()?;
///
/// let result = calculate_bond_yield(1000.0, 37.0, 37.0, &spec)?;
/// assert!((result.total_return - 1738.75).abs() < 1e-9);
/// # Ok::<(), fxyield_core::FxError>(())
/// ```
pub fn calculate_bond_yield(
    investment_amount: f64,
    start_rate: f64,
    end_rate: f64,
    bond_spec: &BondSpec,
) -> FxResult<YieldResult> {
    ensure_positive("investment_amount", investment_amount)?;
    ensure_positive("start_rate", start_rate)?;
    ensure_positive("end_rate", end_rate)?;

    let investment_local = convert_currency(investment_amount, start_rate);

    let annual_coupon = annual_coupon_payment(investment_local, bond_spec.coupon_rate());
    let total_coupons = total_coupon_payments(annual_coupon, bond_spec.duration_years());
    let total_nominal_yield = nominal_yield(
        investment_local,
        bond_spec.nominal_yield_rate(),
        bond_spec.duration_years(),
    );

    let total_return_local = investment_local + total_coupons + total_nominal_yield;
    let total_return = total_return_local / end_rate;

    let profit = total_return - investment_amount;
    let profit_percentage = profit / investment_amount * 100.0;

    Ok(YieldResult {
        total_return,
        profit,
        profit_percentage,
    })
}
