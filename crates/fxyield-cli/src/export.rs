//! CSV export of a profit curve.

use std::path::Path;

use fxyield_analytics::{ProfitCurve, ProfitSink};

use crate::error::CliError;

/// Writes one row per swept end rate:
/// `end_rate,total_return,profit,profit_percentage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvSink;

impl ProfitSink for CsvSink {
    type Error = CliError;

    fn write(&self, curve: &ProfitCurve, path: &Path) -> Result<(), Self::Error> {
        let mut wtr = csv::Writer::from_path(path)?;
        for point in curve.points() {
            wtr.serialize(point)?;
        }
        wtr.flush()?;
        tracing::info!("Wrote {} rows to {}", curve.len(), path.display());
        Ok(())
    }
}
