//! Residual z-score detector.

use anomaly_api::AnomalyConfig;
use anomaly_spi::{AnomalyError, AnomalyRecord, AnomalyReport, ResidualBaseline, Result};
use sales_spi::MonthlySeries;
use tracing::{debug, info};

// Residual spread at or below this fraction of the series scale is noise.
const SPREAD_TOLERANCE: f64 = 1e-9;

/// Flags months whose standardized residual exceeds a threshold.
///
/// Scores use the residual mean and the population standard deviation.
/// A month is flagged when `|z| > threshold`, so raising the threshold can
/// only remove flags.
#[derive(Debug, Clone)]
pub struct ResidualZScoreDetector {
    config: AnomalyConfig,
}

impl ResidualZScoreDetector {
    /// Create a detector, validating the configuration.
    pub fn new(config: AnomalyConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnomalyConfig {
        &self.config
    }

    /// Score every month of `series` against `baseline`.
    pub fn detect(
        &self,
        series: &MonthlySeries,
        baseline: &dyn ResidualBaseline,
    ) -> Result<AnomalyReport> {
        let observed = series.values();
        let expected = baseline.expected(&observed)?;
        if expected.len() != observed.len() {
            return Err(AnomalyError::LengthMismatch {
                expected: observed.len(),
                got: expected.len(),
            });
        }

        let residuals: Vec<f64> = observed
            .iter()
            .zip(&expected)
            .map(|(y, e)| y - e)
            .collect();
        let (mean, std) = mean_and_std(&residuals);
        let scale = observed.iter().fold(1.0_f64, |acc, v| acc.max(v.abs()));
        let scored = residuals.len() >= self.config.min_points
            && std.is_finite()
            && std > SPREAD_TOLERANCE * scale;

        if !scored {
            debug!(
                months = residuals.len(),
                std, "residuals too few or too flat to score"
            );
        }

        let records: Vec<AnomalyRecord> = series
            .points()
            .iter()
            .zip(expected.iter().zip(&residuals))
            .map(|(point, (&expected_revenue, &residual))| {
                let z_score = if scored { (residual - mean) / std } else { 0.0 };
                AnomalyRecord {
                    month: point.month,
                    observed_revenue: point.revenue,
                    expected_revenue,
                    residual,
                    z_score,
                    is_anomaly: z_score.abs() > self.config.threshold,
                }
            })
            .collect();

        let report = AnomalyReport {
            threshold: self.config.threshold,
            baseline: baseline.name(),
            residual_mean: mean,
            residual_std: std,
            records,
        };
        info!(
            baseline = %report.baseline,
            threshold = report.threshold,
            anomalies = report.anomaly_count(),
            "scored residuals"
        );
        Ok(report)
    }
}

/// Mean and population standard deviation; zeros for an empty slice.
pub fn mean_and_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FittedValuesBaseline, RollingMeanBaseline};
    use chrono::NaiveDate;

    fn series(values: &[f64]) -> MonthlySeries {
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        MonthlySeries::from_values(start, values).unwrap()
    }

    fn carry_forward(values: &[f64]) -> Vec<f64> {
        let mut fitted = vec![values[0]];
        fitted.extend_from_slice(&values[..values.len() - 1]);
        fitted
    }

    #[test]
    fn test_spike_flagged_against_carry_forward() {
        let mut values = vec![100.0; 11];
        values.push(1000.0);
        let detector = ResidualZScoreDetector::new(AnomalyConfig::new(2.0)).unwrap();
        let report = detector
            .detect(
                &series(&values),
                &FittedValuesBaseline::new(carry_forward(&values)),
            )
            .unwrap();

        assert_eq!(report.anomaly_count(), 1);
        assert!(report.records[11].is_anomaly);
        // Residuals are 0 x 11 and 900: mean 75, std 248.75
        assert!((report.residual_mean - 75.0).abs() < 1e-9);
        assert!((report.residual_std - 248.746859).abs() < 1e-5);
        assert!((report.records[11].z_score - 11.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_flag_is_strictly_above_threshold() {
        let mut values = vec![100.0; 11];
        values.push(1000.0);
        let z = 11.0_f64.sqrt();
        let detector = ResidualZScoreDetector::new(AnomalyConfig::new(z + 1e-6)).unwrap();
        let report = detector
            .detect(
                &series(&values),
                &FittedValuesBaseline::new(carry_forward(&values)),
            )
            .unwrap();
        assert_eq!(report.anomaly_count(), 0);
    }

    #[test]
    fn test_zero_spread_gives_no_flags() {
        let values = vec![42.0; 6];
        let detector = ResidualZScoreDetector::new(AnomalyConfig::new(0.5)).unwrap();
        let report = detector
            .detect(&series(&values), &RollingMeanBaseline::new(3).unwrap())
            .unwrap();
        assert_eq!(report.records.len(), 6);
        assert!(report.records.iter().all(|r| r.z_score == 0.0 && !r.is_anomaly));
    }

    #[test]
    fn test_too_few_points_gives_no_flags() {
        let values = vec![10.0, 500.0];
        let detector = ResidualZScoreDetector::new(AnomalyConfig::new(0.1)).unwrap();
        let report = detector
            .detect(&series(&values), &RollingMeanBaseline::new(1).unwrap())
            .unwrap();
        assert_eq!(report.anomaly_count(), 0);
    }

    #[test]
    fn test_length_mismatch() {
        let detector = ResidualZScoreDetector::new(AnomalyConfig::default()).unwrap();
        let result = detector.detect(
            &series(&[1.0, 2.0, 3.0]),
            &FittedValuesBaseline::new(vec![1.0, 2.0]),
        );
        assert!(matches!(result, Err(AnomalyError::LengthMismatch { .. })));
    }

    #[test]
    fn test_records_carry_residuals() {
        let values = vec![10.0, 20.0, 15.0, 30.0];
        let detector = ResidualZScoreDetector::new(AnomalyConfig::default()).unwrap();
        let report = detector
            .detect(
                &series(&values),
                &FittedValuesBaseline::new(carry_forward(&values)),
            )
            .unwrap();
        let residuals: Vec<f64> = report.records.iter().map(|r| r.residual).collect();
        assert_eq!(residuals, vec![0.0, 10.0, -5.0, 15.0]);
        assert_eq!(
            report.records[3].month,
            NaiveDate::from_ymd_opt(2023, 4, 1).unwrap()
        );
        assert_eq!(report.records[3].expected_revenue, 15.0);
    }

    #[test]
    fn test_mean_and_std() {
        let (mean, std) = mean_and_std(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((mean - 5.0).abs() < 1e-12);
        assert!((std - 2.0).abs() < 1e-12);
        assert_eq!(mean_and_std(&[]), (0.0, 0.0));
    }
}
