//! Forecast Consumer API
//!
//! Consumer configuration and builder APIs for the monthly forecaster.
//!
//! This crate provides:
//! - [`ForecastConfig`] with horizon, confidence level and history minimum
//! - [`ModelSpec`] selecting the model family
//! - [`ForecastConfigBuilder`] for fluent construction

mod config;

pub use config::{
    long_ar_order, regression_start, ForecastConfig, ForecastConfigBuilder, ModelSpec, MAX_HORIZON,
};

// Re-export SPI types
pub use forecast_spi::{ConfidenceInterval, Forecast, ForecastError, ForecastPoint, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ForecastConfig, ForecastConfigBuilder, ModelSpec};
    pub use forecast_spi::{
        ConfidenceInterval, FittedModel, Forecast, ForecastError, ForecastPoint, Forecaster,
        Result,
    };
}
