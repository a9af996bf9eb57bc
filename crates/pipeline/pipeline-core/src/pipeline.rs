//! Retail BI pipeline

use anomaly_api::BaselineKind;
use anomaly_core::{baseline_for, ResidualZScoreDetector};
use anomaly_spi::{AnomalyError, AnomalyReport};
use forecast_core::{FittedSeries, MonthlyForecaster};
use forecast_spi::{Forecast, ForecastError};
use pipeline_api::{PipelineConfig, PipelineError, PipelineReport, Result, StageResult};
use sales_core::{aggregate_monthly, top_categories, top_countries, total_series, Normalizer};
use sales_spi::{MonthlySeries, RawTable};
use tracing::{info, instrument, warn};

/// Normalize → aggregate → forecast → detect, configured per instance.
#[derive(Debug, Clone)]
pub struct RetailPipeline {
    config: PipelineConfig,
    normalizer: Normalizer,
    forecaster: MonthlyForecaster,
    detector: ResidualZScoreDetector,
}

impl RetailPipeline {
    /// Create a pipeline, validating every stage configuration.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            normalizer: Normalizer::new(config.normalizer.clone())?,
            forecaster: MonthlyForecaster::new(config.forecast.clone())?,
            detector: ResidualZScoreDetector::new(config.anomaly.clone())?,
            config,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run every stage over `table`.
    ///
    /// Returns `Err` only for failures that leave nothing to report (schema
    /// resolution, dataset size, series construction). Forecast and anomaly
    /// failures are recorded on the report.
    #[instrument(skip_all, fields(rows = table.row_count()))]
    pub fn run(&self, table: &RawTable) -> Result<PipelineReport> {
        let batch = self.normalizer.normalize(table)?;

        let breakdown = aggregate_monthly(&batch.transactions);
        let series = total_series(&breakdown, self.config.normalizer.max_months)?;
        let top_countries = top_countries(&breakdown, &self.config.ranking);
        let top_categories = top_categories(&breakdown, &self.config.ranking);
        info!(
            accepted = batch.accepted_count(),
            groups = breakdown.len(),
            months = series.len(),
            "aggregation complete"
        );

        let fitted = self.forecaster.fit(&series);
        let forecast: StageResult<Forecast> = match &fitted {
            Ok(fitted) => fitted.forecast().map_err(Into::into),
            Err(e) => Err(e.clone().into()),
        };
        let anomalies = self.detect(&series, &fitted);

        for (stage, result) in [
            ("forecast", forecast.as_ref().err()),
            ("anomalies", anomalies.as_ref().err()),
        ] {
            if let Some(e) = result {
                warn!(stage, error = %e, "stage produced no output");
            }
        }

        Ok(PipelineReport {
            accepted_rows: batch.accepted_count(),
            rejections: batch.rejections,
            resolved_columns: batch.resolved_columns,
            breakdown,
            series,
            ranking_months: self.config.ranking.last_months,
            top_countries,
            top_categories,
            forecast,
            anomalies,
        })
    }

    /// Anomaly stage. Shares the forecasting history minimum, and the fitted
    /// model when the baseline asks for it.
    fn detect(
        &self,
        series: &MonthlySeries,
        fitted: &std::result::Result<FittedSeries, ForecastError>,
    ) -> StageResult<AnomalyReport> {
        let required = self.config.forecast.min_history;
        if series.len() < required {
            return Err(AnomalyError::InsufficientData {
                required,
                got: series.len(),
            }
            .into());
        }

        let kind = self.config.anomaly.baseline;
        let baseline = match kind {
            BaselineKind::FittedModel => {
                let fitted = fitted.as_ref().map_err(|e| PipelineError::from(e.clone()))?;
                baseline_for(kind, Some(fitted.fitted_values()))?
            }
            BaselineKind::RollingMean { .. } => baseline_for(kind, None)?,
        };
        Ok(self.detector.detect(series, baseline.as_ref())?)
    }
}
