//! Forecast Facade
//!
//! High-level API for monthly revenue forecasting. Re-exports all public
//! types from the forecast stack for convenient usage.
//!
//! # Example
//!
//! ```rust
//! use forecast_facade::{FittedModel, Forecaster, NaiveForecaster};
//!
//! let model = NaiveForecaster::new().fit(&[10.0, 12.0, 11.0, 15.0]).unwrap();
//! let interval = model.forecast(2, 0.95).unwrap();
//! assert_eq!(interval.forecast, vec![15.0, 15.0]);
//! ```

// Re-export everything from SPI
pub use forecast_spi::*;

// Re-export everything from API
pub use forecast_api::*;

// Re-export everything from Core
pub use forecast_core::*;
