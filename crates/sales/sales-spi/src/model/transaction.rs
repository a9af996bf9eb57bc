//! Validated transaction records.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::month::month_start;
use super::raw_table::CanonicalField;
use crate::error::RowRejection;

/// Category assigned when no keyword rule matches.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Country assigned when the input has no usable country value.
pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// A validated transaction with derived revenue, country and category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanTransaction {
    /// Transaction time; date-only inputs are at midnight
    pub timestamp: NaiveDateTime,
    /// Units sold, negative for returns
    pub quantity: i64,
    /// Non-negative unit price
    pub unit_price: f64,
    /// `quantity * unit_price`, always finite
    pub revenue: f64,
    /// Resolved country, `Unknown` when absent
    pub country: String,
    /// Inferred category, `Uncategorized` when no rule matched
    pub category: String,
    /// Original description text, if any
    pub description: Option<String>,
}

impl CleanTransaction {
    /// Calendar date of the transaction.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// First day of the transaction's month.
    pub fn month(&self) -> NaiveDate {
        month_start(self.timestamp.date())
    }

    /// Whether this row is a return.
    pub fn is_return(&self) -> bool {
        self.quantity < 0
    }
}

/// Output of a normalization run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedBatch {
    /// Accepted rows, in input order
    pub transactions: Vec<CleanTransaction>,
    /// Rejected rows with reasons, in input order
    pub rejections: Vec<RowRejection>,
    /// Header chosen for each canonical field that was resolved
    pub resolved_columns: Vec<(CanonicalField, String)>,
}

impl NormalizedBatch {
    pub fn accepted_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn rejected_count(&self) -> usize {
        self.rejections.len()
    }

    /// Sum of revenue over accepted rows.
    pub fn total_revenue(&self) -> f64 {
        self.transactions.iter().map(|t| t.revenue).sum()
    }

    /// Header resolved for `field`, if any.
    pub fn column_for(&self, field: CanonicalField) -> Option<&str> {
        self.resolved_columns
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, header)| header.as_str())
    }
}
