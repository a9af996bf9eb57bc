//! End-to-end tests for the monthly forecaster
//!
//! Exercises fitting, fallback and forecasting through the facade only.

use chrono::NaiveDate;
use forecast_facade::{FittedModel, ForecastConfig, ModelSpec, MonthlyForecaster};
use sales_spi::MonthlySeries;

fn series(values: &[f64]) -> MonthlySeries {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    MonthlySeries::from_values(start, values).unwrap()
}

fn noisy_trend(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 500.0 + 8.0 * i as f64 + 40.0 * ((i * 7 % 5) as f64 - 2.0))
        .collect()
}

#[test]
fn e2e_forecast_is_deterministic() {
    let forecaster = MonthlyForecaster::new(ForecastConfig::default()).unwrap();
    let data = series(&noisy_trend(18));

    let first = forecaster.fit(&data).unwrap().forecast().unwrap();
    let second = forecaster.fit(&data).unwrap().forecast().unwrap();
    assert_eq!(first, second);
}

#[test]
fn e2e_bands_widen_with_horizon() {
    for model in [ModelSpec::default(), ModelSpec::Naive, ModelSpec::Arima { p: 0, d: 1, q: 0 }] {
        let config = ForecastConfig {
            model,
            ..Default::default()
        };
        let fitted = MonthlyForecaster::new(config)
            .unwrap()
            .fit(&series(&noisy_trend(24)))
            .unwrap();
        let interval = fitted.model().forecast(6, 0.95).unwrap();

        for pair in interval.widths().windows(2) {
            assert!(
                pair[1] + 1e-9 >= pair[0],
                "{} narrowed: {} -> {}",
                fitted.model_name(),
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn e2e_constant_history_forecasts_constant() {
    let forecast = MonthlyForecaster::new(ForecastConfig::default())
        .unwrap()
        .fit(&series(&[250.0; 12]))
        .unwrap()
        .forecast()
        .unwrap();

    assert!(forecast.is_fallback());
    assert!((forecast.total_point_estimate() - 750.0).abs() < 1e-9);
}

#[test]
fn e2e_fitted_values_cover_history() {
    let data = noisy_trend(15);
    let fitted = MonthlyForecaster::new(ForecastConfig::default())
        .unwrap()
        .fit(&series(&data))
        .unwrap();

    assert_eq!(fitted.observed(), data.as_slice());
    assert_eq!(fitted.fitted_values().len(), data.len());
    for ((y, f), r) in data
        .iter()
        .zip(fitted.fitted_values())
        .zip(fitted.residuals())
    {
        assert!((y - f - r).abs() < 1e-9);
    }
}

#[test]
fn e2e_zero_history_stays_non_negative() {
    let mut values = vec![0.0; 10];
    values[4] = 30.0;
    let forecast = MonthlyForecaster::new(ForecastConfig::default())
        .unwrap()
        .fit(&series(&values))
        .unwrap()
        .forecast()
        .unwrap();

    for point in &forecast.points {
        assert!(point.lower_bound >= 0.0);
        assert!(point.point_estimate >= 0.0);
        assert!(point.upper_bound >= point.point_estimate);
    }
}
