//! Gap-free monthly revenue series.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::month::{add_months, month_label, month_start, months_between};
use crate::error::{Result, SalesError};

/// One month of total revenue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// First day of the month
    pub month: NaiveDate,
    pub revenue: f64,
}

/// Total revenue per month, strictly increasing and without gaps.
///
/// Months with no transactions are present with zero revenue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlySeries {
    points: Vec<SeriesPoint>,
}

/// One row of the date dimension used by star-schema exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateDimension {
    pub date: NaiveDate,
    pub year: i32,
    pub month: u32,
    pub year_month: String,
}

impl MonthlySeries {
    /// Build a series from consecutive monthly values starting at `start`.
    pub fn from_values(start: NaiveDate, values: &[f64]) -> Result<Self> {
        let start = month_start(start);
        let mut points = Vec::with_capacity(values.len());
        for (offset, &revenue) in values.iter().enumerate() {
            let month = u32::try_from(offset)
                .ok()
                .and_then(|n| add_months(start, n))
                .ok_or_else(|| {
                    SalesError::InvalidSeries(format!(
                        "month {} after {} is out of calendar range",
                        offset, start
                    ))
                })?;
            points.push(SeriesPoint { month, revenue });
        }
        Ok(Self { points })
    }

    /// Wrap points that are already known to be contiguous.
    pub fn from_points(points: Vec<SeriesPoint>) -> Result<Self> {
        let series = Self { points };
        if !series.is_contiguous() {
            return Err(SalesError::InvalidSeries(
                "months must be consecutive first-of-month dates".to_string(),
            ));
        }
        Ok(series)
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Revenue values in month order.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.revenue).collect()
    }

    /// Months in order.
    pub fn months(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.month).collect()
    }

    pub fn first_month(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.month)
    }

    pub fn last_month(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.month)
    }

    pub fn total_revenue(&self) -> f64 {
        self.points.iter().map(|p| p.revenue).sum()
    }

    /// Check that every month is a first-of-month date exactly one month
    /// after its predecessor.
    pub fn is_contiguous(&self) -> bool {
        self.points.iter().all(|p| p.month.day() == 1)
            && self
                .points
                .windows(2)
                .all(|w| months_between(w[0].month, w[1].month) == 1)
    }

    /// Date dimension rows, one per month of the series.
    pub fn date_dimension(&self) -> Vec<DateDimension> {
        self.points
            .iter()
            .map(|p| DateDimension {
                date: p.month,
                year: p.month.year(),
                month: p.month.month(),
                year_month: month_label(p.month),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    #[test]
    fn test_from_values_is_contiguous() {
        let series = MonthlySeries::from_values(date(2023, 11), &[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(series.len(), 4);
        assert!(series.is_contiguous());
        assert_eq!(series.first_month(), Some(date(2023, 11)));
        assert_eq!(series.last_month(), Some(date(2024, 2)));
        assert_eq!(series.values(), vec![1.0, 2.0, 3.0, 4.0]);
        assert!((series.total_revenue() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_points_rejects_gap() {
        let points = vec![
            SeriesPoint { month: date(2024, 1), revenue: 1.0 },
            SeriesPoint { month: date(2024, 3), revenue: 1.0 },
        ];
        assert!(MonthlySeries::from_points(points).is_err());
    }

    #[test]
    fn test_from_points_rejects_mid_month_dates() {
        let points = vec![SeriesPoint {
            month: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            revenue: 1.0,
        }];
        assert!(MonthlySeries::from_points(points).is_err());
    }

    #[test]
    fn test_date_dimension() {
        let series = MonthlySeries::from_values(date(2024, 12), &[5.0, 6.0]).unwrap();
        let dims = series.date_dimension();
        assert_eq!(dims.len(), 2);
        assert_eq!(dims[0].year, 2024);
        assert_eq!(dims[1].year, 2025);
        assert_eq!(dims[1].month, 1);
        assert_eq!(dims[1].year_month, "2025-01");
    }

    #[test]
    fn test_empty_series() {
        let series = MonthlySeries::default();
        assert!(series.is_empty());
        assert!(series.is_contiguous());
        assert_eq!(series.last_month(), None);
    }
}
