//! Pipeline API
//!
//! Types shared by the pipeline and its callers:
//!
//! - [`PipelineConfig`]: every knob of a run, passed in per invocation
//! - [`PipelineReport`]: aggregates, rankings and per-stage results
//! - [`ExecutiveSummary`]: the short text report derived from a run
//! - [`PipelineError`]: run-aborting failures

mod config;
mod error;
mod report;
mod summary;

pub use config::{PipelineConfig, PipelineConfigBuilder};
pub use error::{PipelineError, Result};
pub use report::{PipelineReport, StageResult};
pub use summary::{format_amount, ExecutiveSummary};

// Re-export stage configuration types
pub use anomaly_api::{AnomalyConfig, BaselineKind};
pub use forecast_api::{ForecastConfig, ModelSpec};
pub use sales_api::{CategoryRules, ColumnAliases, NormalizerConfig, RankingConfig};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ExecutiveSummary, PipelineConfig, PipelineConfigBuilder, PipelineError, PipelineReport,
        Result, StageResult,
    };
    pub use anomaly_api::{AnomalyConfig, BaselineKind};
    pub use forecast_api::{ForecastConfig, ModelSpec};
    pub use sales_api::{NormalizerConfig, RankingConfig};
}
