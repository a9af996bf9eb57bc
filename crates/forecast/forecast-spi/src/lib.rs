//! Forecast Service Provider Interface
//!
//! Defines the narrow model interface the pipeline depends on:
//! [`Forecaster::fit`] produces a [`FittedModel`], and
//! [`FittedModel::forecast`] emits point forecasts with confidence bands.
//! Swapping the model family means providing another [`Forecaster`].

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{FittedModel, Forecaster};
pub use error::{ForecastError, Result};
pub use model::{ConfidenceInterval, Forecast, ForecastPoint};
