//! # FxYield Analytics
//!
//! Return and profit calculations for a fixed-coupon bond bought with a
//! foreign currency.
//!
//! - [`calculate_bond_yield`]: total return, profit and profit percentage of
//!   one investment given purchase and redemption exchange rates
//! - [`ProfitSweep`]: the same investment evaluated across a [`RateRange`] of
//!   redemption rates, producing a [`ProfitCurve`]
//! - [`ProfitSink`]: where a finished curve goes (chart, CSV, ...)
//!
//! ## Example
//!
//! ```rust
//! use fxyield_analytics::{ProfitSweep, RateRange};
//! use fxyield_core::BondSpec;
//!
//! let spec = BondSpec::builder()
//!     .coupon_rate(9.85)?
//!     .nominal_yield_rate(19.70)?
//!     .duration_years(2.5)?
//!     .build()?;
//!
//! let curve = ProfitSweep::new(1000.0, 37.0, spec).run(&RateRange::new(37.0, 150.0, 1.0)?)?;
//! assert_eq!(curve.len(), 114);
//! # Ok::<(), fxyield_core::FxError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]

pub mod calculator;
pub mod sweep;

// Re-export all public types and functions
pub use calculator::{
    annual_coupon_payment, calculate_bond_yield, convert_currency, nominal_yield,
    total_coupon_payments, YieldResult,
};
pub use sweep::{CurvePoint, ProfitCurve, ProfitSink, ProfitSweep, RateRange, MAX_SWEEP_POINTS};
