//! Pipeline Core
//!
//! Runs the retail BI stages in order:
//!
//! raw rows → normalizer → monthly aggregation → {forecast, anomalies}
//!
//! Schema problems abort the run. Too short a history only fails the
//! forecast and anomaly stages; aggregates are still returned.

mod pipeline;

pub use pipeline::RetailPipeline;

// Re-export API types used in signatures
pub use pipeline_api::{PipelineConfig, PipelineError, PipelineReport, Result, StageResult};
