//! Forecast Core
//!
//! Model implementations behind the [`Forecaster`] / [`FittedModel`]
//! contracts, and the [`MonthlyForecaster`] that turns a monthly revenue
//! series into month-labelled, non-negative forecast points.
//!
//! - [`arima`]: ARIMA(p, d, q) estimated by two-stage regression
//! - [`naive`]: random-walk fallback
//! - [`confidence`]: normal quantiles and band construction
//! - [`linalg`]: small dense solvers used during estimation

pub mod arima;
pub mod confidence;
pub mod forecaster;
pub mod linalg;
pub mod naive;

pub use arima::{ArimaForecaster, ArimaModel};
pub use confidence::{from_residuals, from_standard_errors, normal_quantile, z_value};
pub use forecaster::{forecast_series, FittedSeries, MonthlyForecaster};
pub use naive::{NaiveForecaster, NaiveModel};

// Re-export SPI types
pub use forecast_spi::{
    ConfidenceInterval, FittedModel, Forecast, ForecastError, ForecastPoint, Forecaster, Result,
};
