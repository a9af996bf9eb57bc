//! Monthly aggregate rows and ranking entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Revenue and transaction count for one (month, country, category) group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    /// First day of the month
    pub month: NaiveDate,
    pub country: String,
    pub category: String,
    /// Sum of revenue over the group
    pub revenue: f64,
    /// Number of transactions in the group
    pub transaction_count: usize,
}

/// A name with its revenue total, as produced by the top-N reductions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub name: String,
    pub revenue: f64,
}

impl RankedEntry {
    pub fn new(name: impl Into<String>, revenue: f64) -> Self {
        Self {
            name: name.into(),
            revenue,
        }
    }
}
