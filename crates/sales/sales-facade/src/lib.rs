//! Sales Facade
//!
//! Unified re-exports for the sales module.
//!
//! This facade provides a single entry point for normalization and
//! aggregation:
//! - `sales_spi` - Record types, schema errors and row rejections
//! - `sales_api` - Configuration types and builders
//! - `sales_core` - Normalizer, classifier, aggregator and rankings
//!
//! # Example
//!
//! ```rust
//! use sales_facade::{
//!     aggregate_monthly, total_series, Normalizer, NormalizerConfig, RawTable, DEFAULT_MAX_MONTHS,
//! };
//!
//! let table = RawTable::from_rows(
//!     &["Date", "Qty", "Price"],
//!     &[&["2024-01-05", "2", "10.0"], &["2024-03-01", "1", "5.0"]],
//! );
//! let batch = Normalizer::new(NormalizerConfig::default())
//!     .unwrap()
//!     .normalize(&table)
//!     .unwrap();
//! let series = total_series(&aggregate_monthly(&batch.transactions), DEFAULT_MAX_MONTHS).unwrap();
//! assert_eq!(series.values(), vec![20.0, 0.0, 5.0]);
//! ```

// Re-export everything from SPI
pub use sales_spi::*;

// Re-export everything from API
pub use sales_api::*;

// Re-export everything from Core
pub use sales_core::*;
