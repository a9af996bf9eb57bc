//! Monthly grouping and the total revenue series.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use sales_spi::{
    add_months, months_between, CleanTransaction, MonthlyAggregate, MonthlySeries, Result, SalesError,
    SeriesPoint,
};
use tracing::debug;

/// Sum values in ascending `total_cmp` order.
///
/// The result does not depend on the order the values arrived in.
pub fn stable_sum(values: &mut [f64]) -> f64 {
    values.sort_by(f64::total_cmp);
    values.iter().sum()
}

/// Group transactions by (month, country, category).
///
/// Rows are ordered by month ascending, revenue descending, then country
/// and category.
pub fn aggregate_monthly(transactions: &[CleanTransaction]) -> Vec<MonthlyAggregate> {
    let mut groups: BTreeMap<(NaiveDate, &str, &str), Vec<f64>> = BTreeMap::new();
    for transaction in transactions {
        groups
            .entry((
                transaction.month(),
                transaction.country.as_str(),
                transaction.category.as_str(),
            ))
            .or_default()
            .push(transaction.revenue);
    }

    let mut rows: Vec<MonthlyAggregate> = groups
        .into_iter()
        .map(|((month, country, category), mut revenues)| MonthlyAggregate {
            month,
            country: country.to_string(),
            category: category.to_string(),
            transaction_count: revenues.len(),
            revenue: stable_sum(&mut revenues),
        })
        .collect();

    rows.sort_by(|a, b| {
        a.month
            .cmp(&b.month)
            .then_with(|| b.revenue.total_cmp(&a.revenue))
            .then_with(|| a.country.cmp(&b.country))
            .then_with(|| a.category.cmp(&b.category))
    });
    debug!(groups = rows.len(), "aggregated monthly breakdown");
    rows
}

/// Collapse the breakdown table into total revenue per month.
///
/// The month axis spans the first to the last observed month; months with
/// no rows appear with zero revenue. Fails with
/// [`SalesError::SeriesTooLong`] when that span exceeds `max_months`.
pub fn total_series(aggregates: &[MonthlyAggregate], max_months: usize) -> Result<MonthlySeries> {
    let mut by_month: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
    for row in aggregates {
        by_month.entry(row.month).or_default().push(row.revenue);
    }

    let (Some(&first), Some(&last)) = (by_month.keys().next(), by_month.keys().next_back())
    else {
        return Ok(MonthlySeries::default());
    };

    let span = usize::try_from(months_between(first, last) + 1).unwrap_or(usize::MAX);
    if span > max_months {
        return Err(SalesError::SeriesTooLong {
            months: span,
            limit: max_months,
        });
    }

    let mut points = Vec::new();
    let mut month = first;
    loop {
        let revenue = by_month
            .get_mut(&month)
            .map(|values| stable_sum(values))
            .unwrap_or(0.0);
        points.push(SeriesPoint { month, revenue });
        if month >= last {
            break;
        }
        month = add_months(month, 1).ok_or_else(|| {
            SalesError::InvalidSeries(format!("no month after {}", month))
        })?;
    }

    let filled = points.len() - by_month.len();
    debug!(months = points.len(), filled, "built total revenue series");
    MonthlySeries::from_points(points)
}
