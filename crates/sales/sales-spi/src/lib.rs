//! Sales Service Provider Interface
//!
//! Defines the record types that flow through the sales pipeline, the
//! schema and row-level error types, and the category classification
//! contract.
//!
//! Data moves strictly forward:
//! [`RawTable`] → [`CleanTransaction`] → [`MonthlyAggregate`] → [`MonthlySeries`].

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::CategoryClassifier;
pub use error::{RejectionReason, Result, RowRejection, SalesError};
pub use model::{
    add_months, month_label, month_start, months_between, CanonicalField, CleanTransaction,
    DateDimension, MonthlyAggregate, MonthlySeries, NormalizedBatch, RankedEntry, RawTable,
    SeriesPoint, UNCATEGORIZED, UNKNOWN_COUNTRY,
};
