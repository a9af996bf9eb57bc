//! Pipeline Facade
//!
//! High-level API for running the retail BI pipeline end to end.
//!
//! # Example
//!
//! ```rust
//! use pipeline_facade::{PipelineConfig, RawTable, RetailPipeline};
//!
//! let table = RawTable::from_rows(
//!     &["InvoiceDate", "Quantity", "UnitPrice", "Country"],
//!     &[&["2024-01-05", "2", "10.0", "france"], &["2024-02-01", "1", "5.0", "spain"]],
//! );
//! let report = RetailPipeline::new(PipelineConfig::default())
//!     .unwrap()
//!     .run(&table)
//!     .unwrap();
//! assert_eq!(report.series.values(), vec![20.0, 5.0]);
//! assert!(report.forecast.is_err());
//! ```

// Re-export everything from pipeline-api
pub use pipeline_api::*;

// Re-export the orchestrator
pub use pipeline_core::RetailPipeline;

// Record types that appear in reports
pub use anomaly_spi::{AnomalyError, AnomalyRecord, AnomalyReport};
pub use forecast_spi::{Forecast, ForecastError, ForecastPoint};
pub use sales_spi::{
    CanonicalField, DateDimension, MonthlyAggregate, MonthlySeries, RankedEntry, RawTable,
    RejectionReason, RowRejection, SalesError, SeriesPoint,
};
