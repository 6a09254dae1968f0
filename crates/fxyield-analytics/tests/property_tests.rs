//! Property-based tests for the return model.
//!
//! These tests verify properties that hold for every valid input:
//! - Flat rates with no income return exactly the investment
//! - A weaker local currency at redemption always lowers the return
//! - The calculator is deterministic
//! - Builder values survive `build()` unchanged

use approx::assert_relative_eq;
use fxyield_analytics::{calculate_bond_yield, ProfitSweep, RateRange};
use fxyield_core::{BondSpec, FxError};
use proptest::prelude::*;

fn spec(coupon: f64, nominal: f64, years: f64) -> BondSpec {
    BondSpec::builder()
        .coupon_rate(coupon)
        .unwrap()
        .nominal_yield_rate(nominal)
        .unwrap()
        .duration_years(years)
        .unwrap()
        .build()
        .unwrap()
}

fn investment_strategy() -> impl Strategy<Value = f64> {
    1.0..1.0e7
}

fn rate_strategy() -> impl Strategy<Value = f64> {
    0.01..1.0e3
}

fn percent_strategy() -> impl Strategy<Value = f64> {
    0.0..=100.0
}

fn duration_strategy() -> impl Strategy<Value = f64> {
    0.1..50.0
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_no_income_flat_rate_returns_investment(
        investment in investment_strategy(),
        rate in rate_strategy(),
        years in duration_strategy(),
    ) {
        let result = calculate_bond_yield(investment, rate, rate, &spec(0.0, 0.0, years)).unwrap();

        assert_relative_eq!(result.total_return, investment, max_relative = 1e-12);
        prop_assert!(result.profit.abs() <= investment * 1e-12);
    }

    #[test]
    fn test_higher_end_rate_lowers_return(
        investment in investment_strategy(),
        start in rate_strategy(),
        end in rate_strategy(),
        bump in 0.001..1.0f64,
        coupon in percent_strategy(),
        nominal in percent_strategy(),
        years in duration_strategy(),
    ) {
        let bond = spec(coupon, nominal, years);
        let lower = calculate_bond_yield(investment, start, end, &bond).unwrap();
        let higher = calculate_bond_yield(investment, start, end * (1.0 + bump), &bond).unwrap();

        prop_assert!(higher.total_return < lower.total_return);
        prop_assert!(higher.profit < lower.profit);
    }

    #[test]
    fn test_calculation_is_deterministic(
        investment in investment_strategy(),
        start in rate_strategy(),
        end in rate_strategy(),
        coupon in percent_strategy(),
        nominal in percent_strategy(),
        years in duration_strategy(),
    ) {
        let bond = spec(coupon, nominal, years);
        let first = calculate_bond_yield(investment, start, end, &bond).unwrap();
        let second = calculate_bond_yield(investment, start, end, &bond).unwrap();

        prop_assert_eq!(first.total_return.to_bits(), second.total_return.to_bits());
        prop_assert_eq!(first.profit.to_bits(), second.profit.to_bits());
        prop_assert_eq!(first.profit_percentage.to_bits(), second.profit_percentage.to_bits());
    }

    #[test]
    fn test_builder_round_trip(
        coupon in percent_strategy(),
        nominal in percent_strategy(),
        years in duration_strategy(),
    ) {
        let bond = spec(coupon, nominal, years);

        prop_assert_eq!(bond.coupon_rate(), coupon);
        prop_assert_eq!(bond.nominal_yield_rate(), nominal);
        prop_assert_eq!(bond.duration_years(), years);
    }

    #[test]
    fn test_out_of_range_coupon_rejected(excess in 0.001..1.0e6f64) {
        prop_assert!(BondSpec::builder().coupon_rate(100.0 + excess).is_err());
        prop_assert!(BondSpec::builder().coupon_rate(-excess).is_err());
    }

    #[test]
    fn test_non_positive_investment_rejected(
        investment in -1.0e7..=0.0f64,
        start in rate_strategy(),
        end in rate_strategy(),
    ) {
        let result = calculate_bond_yield(investment, start, end, &spec(9.85, 19.70, 2.5));
        prop_assert!(matches!(result, Err(FxError::InvalidInput { .. })), "expected InvalidInput error, got {:?}", result);
    }

    #[test]
    fn test_sweep_points_match_calculator(
        from in 1.0..100.0f64,
        width in 0.0..50.0f64,
        step in 0.5..5.0f64,
    ) {
        let bond = spec(9.85, 19.70, 2.5);
        let range = RateRange::new(from, from + width, step).unwrap();
        let curve = ProfitSweep::new(1000.0, 37.0, bond).run(&range).unwrap();

        prop_assert_eq!(curve.len(), range.len());
        prop_assert!(curve.points().last().unwrap().end_rate >= range.stop() - 1e-9);
        for point in curve.points() {
            let direct = calculate_bond_yield(1000.0, 37.0, point.end_rate, &bond).unwrap();
            prop_assert_eq!(point.profit.to_bits(), direct.profit.to_bits());
        }
    }
}
