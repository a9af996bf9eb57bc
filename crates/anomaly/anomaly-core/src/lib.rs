//! Anomaly Detection Core
//!
//! Residual baselines and the z-score detector for monthly revenue.

mod baseline;
mod detector;

pub use baseline::*;
pub use detector::*;
