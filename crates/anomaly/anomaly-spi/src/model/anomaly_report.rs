//! Anomaly detection report.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::AnomalyRecord;

/// Records for every historical month plus the statistics behind them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyReport {
    /// Threshold applied to `|z|`.
    pub threshold: f64,
    /// Name of the baseline that produced expected values.
    pub baseline: String,
    pub residual_mean: f64,
    /// Population standard deviation of the residuals.
    pub residual_std: f64,
    /// One record per month, in month order.
    pub records: Vec<AnomalyRecord>,
}

impl AnomalyReport {
    /// Number of flagged months.
    pub fn anomaly_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_anomaly).count()
    }

    /// Flagged records only.
    pub fn anomalies(&self) -> impl Iterator<Item = &AnomalyRecord> {
        self.records.iter().filter(|r| r.is_anomaly)
    }

    pub fn flagged_months(&self) -> Vec<NaiveDate> {
        self.anomalies().map(|r| r.month).collect()
    }
}
