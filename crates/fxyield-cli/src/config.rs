//! Scenario file.
//!
//! A TOML file describing the investment, the bond and the sweep. Every key
//! is optional; command-line flags take precedence over the file, and the
//! file over the built-in defaults below.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CliError, CliResult};

/// Amount invested, in the investment currency.
pub const DEFAULT_INVESTMENT: f64 = 1000.0;
/// Exchange rate at purchase, local units per investment unit.
pub const DEFAULT_START_RATE: f64 = 37.0;
/// Annual coupon rate, percent.
pub const DEFAULT_COUPON_RATE: f64 = 9.85;
/// Annual nominal yield rate, percent.
pub const DEFAULT_NOMINAL_YIELD_RATE: f64 = 19.70;
/// Bond duration in years.
pub const DEFAULT_DURATION_YEARS: f64 = 2.5;
/// Last end rate of the sweep.
pub const DEFAULT_SWEEP_TO: f64 = 150.0;
/// Increment between swept end rates.
pub const DEFAULT_SWEEP_STEP: f64 = 1.0;
/// Chart written by `sweep` when none is given.
pub const DEFAULT_CHART_FILE: &str = "profits_vs_exchange_rate.svg";

/// Investment and bond parameters read from a scenario file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Amount invested.
    pub investment: Option<f64>,
    /// Exchange rate at purchase.
    pub start_rate: Option<f64>,
    /// Exchange rate at redemption, used by `calc`.
    pub end_rate: Option<f64>,
    /// Coupon rate in percent.
    pub coupon_rate: Option<f64>,
    /// Nominal yield rate in percent.
    pub nominal_yield_rate: Option<f64>,
    /// Duration in years.
    pub duration_years: Option<f64>,
    /// Sweep settings.
    #[serde(default)]
    pub sweep: SweepSection,
}

/// The `[sweep]` table of a scenario file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SweepSection {
    /// First end rate; defaults to the start rate.
    pub from: Option<f64>,
    /// Last end rate.
    pub to: Option<f64>,
    /// Increment between end rates.
    pub step: Option<f64>,
    /// Chart output path.
    pub chart: Option<PathBuf>,
    /// CSV output path.
    pub csv: Option<PathBuf>,
}

impl Scenario {
    /// Loads a scenario from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Loads `path` if given, otherwise returns an empty scenario.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => {
                tracing::info!("Loading scenario from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_scenario() {
        let scenario: Scenario = toml::from_str(
            r#"
            investment = 2500.0
            start_rate = 40.0
            coupon_rate = 10.0
            nominal_yield_rate = 5.0
            duration_years = 3.0

            [sweep]
            from = 40.0
            to = 60.0
            step = 0.5
            chart = "out.svg"
            csv = "out.csv"
            "#,
        )
        .unwrap();

        assert_eq!(scenario.investment, Some(2500.0));
        assert_eq!(scenario.end_rate, None);
        assert_eq!(scenario.sweep.step, Some(0.5));
        assert_eq!(scenario.sweep.chart, Some(PathBuf::from("out.svg")));
    }

    #[test]
    fn test_empty_scenario() {
        let scenario: Scenario = toml::from_str("").unwrap();
        assert_eq!(scenario, Scenario::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result: Result<Scenario, _> = toml::from_str("coupon = 5.0\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "investment = \"lots\"").unwrap();

        let err = Scenario::from_file(file.path()).unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_load_without_path() {
        assert_eq!(Scenario::load(None).unwrap(), Scenario::default());
    }
}
