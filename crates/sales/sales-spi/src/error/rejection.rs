//! Per-row validation failures.
//!
//! Rejections never abort a run; the normalizer collects them alongside the
//! accepted rows.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::CanonicalField;

/// Why a single input row was dropped.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectionReason {
    #[error("missing value for '{field}'")]
    MissingValue { field: CanonicalField },

    #[error("unparseable date '{value}'")]
    UnparseableDate { value: String },

    #[error("non-numeric quantity '{value}'")]
    NonNumericQuantity { value: String },

    #[error("non-numeric price '{value}'")]
    NonNumericPrice { value: String },

    #[error("negative price {value}")]
    NegativePrice { value: f64 },

    #[error("revenue is not finite")]
    NonFiniteRevenue,

    #[error("return excluded (quantity {quantity})")]
    ReturnExcluded { quantity: i64 },
}

/// A rejected row: 1-based data row index (header excluded) and reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowRejection {
    pub row: usize,
    pub reason: RejectionReason,
}

impl std::fmt::Display for RowRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {}: {}", self.row, self.reason)
    }
}
