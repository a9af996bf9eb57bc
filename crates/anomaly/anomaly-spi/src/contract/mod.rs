//! Contract definitions for anomaly detection.
//!
//! This module contains trait definitions that providers must implement.

mod residual_baseline;

pub use residual_baseline::ResidualBaseline;
