//! Error types for the FxYield library.
//!
//! Two failure kinds exist: bond parameters rejected by the builder, and
//! calculator inputs that cannot be priced.

use thiserror::Error;

/// A specialized Result type for FxYield operations.
pub type FxResult<T> = Result<T, FxError>;

/// The error type for FxYield operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FxError {
    /// A bond parameter is out of range or was never set.
    #[error("Validation error: {field} {reason}")]
    Validation {
        /// Name of the offending bond field.
        field: String,
        /// Description of what's invalid.
        reason: String,
    },

    /// A calculator input is not usable (non-positive amount or rate).
    #[error("Invalid input: {name} = {value} ({reason})")]
    InvalidInput {
        /// Name of the offending input.
        name: String,
        /// The rejected value.
        value: f64,
        /// Reason for invalidity.
        reason: String,
    },
}

impl FxError {
    /// Creates a validation error for a bond field.
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a validation error for a field the builder never received.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::validation(field, "must be set before building")
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(name: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            name: name.into(),
            value,
            reason: reason.into(),
        }
    }

    /// Returns true for builder validation failures.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Returns true for calculator input failures.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

/// Rejects anything that is not a finite, strictly positive number.
///
/// Shared by the calculator and the sweep range so both report the same
/// error shape.
pub fn ensure_positive(name: &str, value: f64) -> FxResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(FxError::invalid_input(
            name,
            value,
            "must be a positive number",
        ))
    }
}
