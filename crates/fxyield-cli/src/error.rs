//! CLI error types.

use thiserror::Error;

use fxyield_core::FxError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bond or calculator input rejected by the library.
    #[error(transparent)]
    Calculation(#[from] FxError),

    /// Scenario file could not be parsed.
    #[error("Configuration error in {path}: {reason}")]
    Config {
        /// File being read.
        path: String,
        /// Parser message.
        reason: String,
    },

    /// Chart could not be rendered.
    #[error("Chart error: {0}")]
    Chart(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV export error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
