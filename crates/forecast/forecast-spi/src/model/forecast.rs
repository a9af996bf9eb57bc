//! Month-labelled forecast output

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One future month with its point estimate and confidence band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// First day of the forecast month
    pub month: NaiveDate,
    pub point_estimate: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

impl ForecastPoint {
    pub fn width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }
}

/// Forecast for the months immediately following the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Name of the model that produced the points
    pub model: String,
    pub confidence_level: f64,
    /// Points in strictly increasing month order
    pub points: Vec<ForecastPoint>,
    /// Why the configured model was replaced by the naive one, if it was
    pub fallback: Option<String>,
}

impl Forecast {
    pub fn horizon(&self) -> usize {
        self.points.len()
    }

    /// Sum of the point estimates over the horizon.
    pub fn total_point_estimate(&self) -> f64 {
        self.points.iter().map(|p| p.point_estimate).sum()
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(month: u32, value: f64) -> ForecastPoint {
        ForecastPoint {
            month: NaiveDate::from_ymd_opt(2024, month, 1).unwrap(),
            point_estimate: value,
            lower_bound: value - 10.0,
            upper_bound: value + 10.0,
        }
    }

    #[test]
    fn test_forecast_totals() {
        let forecast = Forecast {
            model: "Naive".to_string(),
            confidence_level: 0.95,
            points: vec![point(1, 100.0), point(2, 150.0)],
            fallback: Some("constant series".to_string()),
        };

        assert_eq!(forecast.horizon(), 2);
        assert!((forecast.total_point_estimate() - 250.0).abs() < 1e-10);
        assert!(forecast.is_fallback());
        assert!((forecast.points[0].width() - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_forecast_point_serializes_month_as_date() {
        let json = serde_json::to_string(&point(3, 1.0)).unwrap();
        assert!(json.contains("\"month\":\"2024-03-01\""));
    }
}
