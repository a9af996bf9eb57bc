//! Per-month anomaly record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Standardized residual for one historical month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnomalyRecord {
    /// First day of the month.
    pub month: NaiveDate,
    pub observed_revenue: f64,
    pub expected_revenue: f64,
    /// `observed_revenue - expected_revenue`
    pub residual: f64,
    pub z_score: f64,
    /// `|z_score|` exceeded the threshold.
    pub is_anomaly: bool,
}
