//! Bond specification and its validating builder.
//!
//! A [`BondSpec`] carries the three parameters the return model needs:
//! - annual coupon rate, in percent
//! - annual nominal yield rate, in percent
//! - duration, in years
//!
//! Values are only produced by [`BondSpecBuilder::build`], so every
//! `BondSpec` in circulation satisfies its range invariants.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FxError, FxResult};

/// Upper bound for percentage rates.
const MAX_RATE_PERCENT: f64 = 100.0;

/// Immutable description of a fixed-coupon bond.
///
/// # Example
///
/// ```rust
/// use fxyield_core::BondSpec;
///
/// let spec = BondSpec::builder()
///     .coupon_rate(9.85)?
///     .nominal_yield_rate(19.70)?
///     .duration_years(2.5)?
///     .build()?;
///
/// assert_eq!(spec.coupon_rate(), 9.85);
/// assert_eq!(spec.duration_years(), 2.5);
/// # Ok::<(), fxyield_core::FxError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondSpec {
    coupon_rate: f64,
    nominal_yield_rate: f64,
    duration_years: f64,
}

impl BondSpec {
    /// Creates a new builder for bond specifications.
    #[must_use]
    pub fn builder() -> BondSpecBuilder {
        BondSpecBuilder::default()
    }

    /// Annual coupon rate in percent (9.85 for 9.85%).
    #[must_use]
    pub fn coupon_rate(&self) -> f64 {
        self.coupon_rate
    }

    /// Annual nominal yield rate in percent.
    #[must_use]
    pub fn nominal_yield_rate(&self) -> f64 {
        self.nominal_yield_rate
    }

    /// Duration of the bond in years.
    #[must_use]
    pub fn duration_years(&self) -> f64 {
        self.duration_years
    }
}

impl fmt::Display for BondSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BondSpec(coupon_rate={}, nominal_yield_rate={}, duration_years={})",
            self.coupon_rate, self.nominal_yield_rate, self.duration_years
        )
    }
}

/// Builder for [`BondSpec`].
///
/// Setters validate eagerly and hand the builder back, so a bad value fails
/// at the call that supplied it. `build` borrows the builder: it can keep
/// receiving setters and be built again, and every build is an independent
/// copy.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BondSpecBuilder {
    coupon_rate: Option<f64>,
    nominal_yield_rate: Option<f64>,
    duration_years: Option<f64>,
}

impl BondSpecBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the coupon rate as a percentage (9.85 for 9.85%).
    ///
    /// # Errors
    ///
    /// Returns a validation error unless `0 <= rate <= 100`.
    pub fn coupon_rate(mut self, rate: f64) -> FxResult<Self> {
        self.coupon_rate = Some(validate_percent("coupon_rate", rate)?);
        Ok(self)
    }

    /// Sets the nominal yield rate as a percentage.
    ///
    /// # Errors
    ///
    /// Returns a validation error unless `0 <= rate <= 100`.
    pub fn nominal_yield_rate(mut self, rate: f64) -> FxResult<Self> {
        self.nominal_yield_rate = Some(validate_percent("nominal_yield_rate", rate)?);
        Ok(self)
    }

    /// Sets the duration in years.
    ///
    /// # Errors
    ///
    /// Returns a validation error unless the duration is finite and positive.
    pub fn duration_years(mut self, years: f64) -> FxResult<Self> {
        if !years.is_finite() || years <= 0.0 {
            return Err(FxError::validation(
                "duration_years",
                format!("must be a positive number of years, got {years}"),
            ));
        }
        self.duration_years = Some(years);
        Ok(self)
    }

    /// Builds the `BondSpec`.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first field that was never set.
    pub fn build(&self) -> FxResult<BondSpec> {
        let coupon_rate = self
            .coupon_rate
            .ok_or_else(|| FxError::missing_field("coupon_rate"))?;
        let nominal_yield_rate = self
            .nominal_yield_rate
            .ok_or_else(|| FxError::missing_field("nominal_yield_rate"))?;
        let duration_years = self
            .duration_years
            .ok_or_else(|| FxError::missing_field("duration_years"))?;

        Ok(BondSpec {
            coupon_rate,
            nominal_yield_rate,
            duration_years,
        })
    }
}

fn validate_percent(field: &str, rate: f64) -> FxResult<f64> {
    if (0.0..=MAX_RATE_PERCENT).contains(&rate) {
        Ok(rate)
    } else {
        Err(FxError::validation(
            field,
            format!("must be between 0 and 100 percent, got {rate}"),
        ))
    }
}

impl Serialize for BondSpec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("BondSpec", 3)?;
        state.serialize_field("coupon_rate", &self.coupon_rate)?;
        state.serialize_field("nominal_yield_rate", &self.nominal_yield_rate)?;
        state.serialize_field("duration_years", &self.duration_years)?;
        state.end()
    }
}

// Route through the builder so deserialized values obey the same ranges.
impl<'de> Deserialize<'de> for BondSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct BondSpecData {
            coupon_rate: f64,
            nominal_yield_rate: f64,
            duration_years: f64,
        }

        let data = BondSpecData::deserialize(deserializer)?;
        BondSpecBuilder::new()
            .coupon_rate(data.coupon_rate)
            .and_then(|b| b.nominal_yield_rate(data.nominal_yield_rate))
            .and_then(|b| b.duration_years(data.duration_years))
            .and_then(|b| b.build())
            .map_err(serde::de::Error::custom)
    }
}
