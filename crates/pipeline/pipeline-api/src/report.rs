//! Pipeline output

use anomaly_spi::AnomalyReport;
use forecast_spi::Forecast;
use sales_spi::{
    CanonicalField, DateDimension, MonthlyAggregate, MonthlySeries, RankedEntry, RowRejection,
};

use crate::error::PipelineError;
use crate::summary::ExecutiveSummary;

/// Outcome of a stage that may fail without aborting the run.
pub type StageResult<T> = std::result::Result<T, PipelineError>;

/// Everything one run produces.
///
/// Normalization and aggregation outputs are always present. Forecasting
/// and anomaly detection can fail independently (typically for too short a
/// history), so their results are kept per stage.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineReport {
    pub accepted_rows: usize,
    /// Rows dropped by validation, in input order
    pub rejections: Vec<RowRejection>,
    /// Header chosen for each canonical field
    pub resolved_columns: Vec<(CanonicalField, String)>,
    /// Country x category monthly table
    pub breakdown: Vec<MonthlyAggregate>,
    /// Gap-free total revenue per month
    pub series: MonthlySeries,
    /// Trailing window used for the rankings
    pub ranking_months: u32,
    pub top_countries: Vec<RankedEntry>,
    pub top_categories: Vec<RankedEntry>,
    pub forecast: StageResult<Forecast>,
    pub anomalies: StageResult<AnomalyReport>,
}

impl PipelineReport {
    pub fn rejected_rows(&self) -> usize {
        self.rejections.len()
    }

    /// Date dimension rows for the months of the series.
    pub fn date_dimension(&self) -> Vec<DateDimension> {
        self.series.date_dimension()
    }

    /// Stage failures, forecast first.
    pub fn stage_errors(&self) -> Vec<(&'static str, &PipelineError)> {
        let mut errors = Vec::new();
        if let Err(e) = &self.forecast {
            errors.push(("forecast", e));
        }
        if let Err(e) = &self.anomalies {
            errors.push(("anomalies", e));
        }
        errors
    }

    /// Headline figures for the executive report.
    pub fn summary(&self) -> ExecutiveSummary {
        let forecast = self.forecast.as_ref().ok();
        let anomalies = self.anomalies.as_ref().ok();
        ExecutiveSummary {
            accepted_rows: self.accepted_rows,
            rejected_rows: self.rejected_rows(),
            ranking_months: self.ranking_months,
            top_country: self.top_countries.first().cloned(),
            top_category: self.top_categories.first().cloned(),
            forecast_horizon: forecast.map(|f| f.horizon()),
            forecast_total: forecast.map(|f| f.total_point_estimate()),
            forecast_model: forecast.map(|f| f.model.clone()),
            anomaly_count: anomalies.map(|a| a.anomaly_count()),
            anomaly_threshold: anomalies.map(|a| a.threshold),
            stage_errors: self
                .stage_errors()
                .into_iter()
                .map(|(stage, e)| format!("{}: {}", stage, e))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anomaly_spi::{AnomalyError, AnomalyRecord};
    use chrono::NaiveDate;
    use forecast_spi::{ForecastError, ForecastPoint};
    use sales_spi::RejectionReason;

    fn month(m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, 1).unwrap()
    }

    fn report() -> PipelineReport {
        PipelineReport {
            accepted_rows: 10,
            rejections: vec![RowRejection {
                row: 4,
                reason: RejectionReason::NegativePrice { value: -1.0 },
            }],
            resolved_columns: vec![],
            breakdown: vec![],
            series: MonthlySeries::from_values(month(1), &[10.0, 20.0, 30.0]).unwrap(),
            ranking_months: 3,
            top_countries: vec![RankedEntry::new("France", 50.0)],
            top_categories: vec![RankedEntry::new("Stationery", 40.0)],
            forecast: Ok(Forecast {
                model: "Naive".to_string(),
                confidence_level: 0.95,
                points: vec![ForecastPoint {
                    month: month(4),
                    point_estimate: 30.0,
                    lower_bound: 10.0,
                    upper_bound: 50.0,
                }],
                fallback: None,
            }),
            anomalies: Ok(AnomalyReport {
                threshold: 3.0,
                baseline: "fitted_model".to_string(),
                residual_mean: 0.0,
                residual_std: 1.0,
                records: vec![AnomalyRecord {
                    month: month(3),
                    observed_revenue: 30.0,
                    expected_revenue: 20.0,
                    residual: 10.0,
                    z_score: 3.5,
                    is_anomaly: true,
                }],
            }),
        }
    }

    #[test]
    fn test_summary_from_successful_run() {
        let summary = report().summary();
        assert_eq!(summary.accepted_rows, 10);
        assert_eq!(summary.rejected_rows, 1);
        assert_eq!(summary.top_country.unwrap().name, "France");
        assert_eq!(summary.top_category.unwrap().name, "Stationery");
        assert_eq!(summary.forecast_total, Some(30.0));
        assert_eq!(summary.forecast_horizon, Some(1));
        assert_eq!(summary.anomaly_count, Some(1));
        assert!(summary.stage_errors.is_empty());
    }

    #[test]
    fn test_summary_lists_stage_errors() {
        let mut report = report();
        report.forecast = Err(ForecastError::InsufficientData {
            required: 6,
            actual: 3,
        }
        .into());
        report.anomalies = Err(AnomalyError::InsufficientData {
            required: 6,
            got: 3,
        }
        .into());

        let summary = report.summary();
        assert_eq!(summary.forecast_total, None);
        assert_eq!(summary.anomaly_count, None);
        assert_eq!(summary.stage_errors.len(), 2);
        assert!(summary.stage_errors[0].starts_with("forecast: "));
        assert!(summary.stage_errors[1].starts_with("anomalies: "));
    }

    #[test]
    fn test_date_dimension_follows_series() {
        let rows = report().date_dimension();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].year_month, "2024-03");
    }
}
