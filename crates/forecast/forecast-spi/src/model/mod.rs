//! Model module containing data structures

mod confidence_interval;
mod forecast;

pub use confidence_interval::ConfidenceInterval;
pub use forecast::{Forecast, ForecastPoint};
