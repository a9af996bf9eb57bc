//! Trait for model estimation

use crate::contract::FittedModel;
use crate::error::Result;

/// Estimates a model from a univariate series.
///
/// Implementations must be deterministic: fitting the same data twice
/// yields models with identical forecasts.
pub trait Forecaster: Send + Sync {
    /// Human-readable model name, e.g. `ARIMA(1,1,1)`.
    fn name(&self) -> String;

    /// Fit the model to `data`, oldest observation first.
    fn fit(&self, data: &[f64]) -> Result<Box<dyn FittedModel>>;
}
