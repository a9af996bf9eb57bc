//! Residual baseline trait definition.

use crate::error::Result;

/// Source of expected values for a historical series.
///
/// Residuals are `observed - expected`, so a baseline decides what counts as
/// "normal" for each month.
pub trait ResidualBaseline: Send + Sync {
    /// Short label recorded on the report.
    fn name(&self) -> String;

    /// Expected value for every observation, same length as `observed`.
    fn expected(&self, observed: &[f64]) -> Result<Vec<f64>>;
}
