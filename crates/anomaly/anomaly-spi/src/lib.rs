//! Anomaly Detection Service Provider Interface
//!
//! Defines the record types produced by residual-based anomaly detection
//! and the [`ResidualBaseline`] contract that supplies expected values.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::ResidualBaseline;
pub use error::{AnomalyError, Result};
pub use model::{AnomalyRecord, AnomalyReport};
