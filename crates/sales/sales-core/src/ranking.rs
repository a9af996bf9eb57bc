//! Top-N reductions over the monthly breakdown table.

use std::collections::BTreeMap;

use sales_api::RankingConfig;
use sales_spi::{months_between, MonthlyAggregate, RankedEntry};

use crate::aggregator::stable_sum;

/// Countries by revenue over the trailing window, best first.
pub fn top_countries(table: &[MonthlyAggregate], ranking: &RankingConfig) -> Vec<RankedEntry> {
    rank_by(table, ranking, |row| &row.country)
}

/// Categories by revenue over the trailing window, best first.
pub fn top_categories(table: &[MonthlyAggregate], ranking: &RankingConfig) -> Vec<RankedEntry> {
    rank_by(table, ranking, |row| &row.category)
}

/// Single best country over the last `last_months` months.
pub fn top_country(table: &[MonthlyAggregate], last_months: u32) -> Option<RankedEntry> {
    top_countries(table, &RankingConfig::new(last_months, 1))
        .into_iter()
        .next()
}

/// Single best category over the last `last_months` months.
pub fn top_category(table: &[MonthlyAggregate], last_months: u32) -> Option<RankedEntry> {
    top_categories(table, &RankingConfig::new(last_months, 1))
        .into_iter()
        .next()
}

/// Sum revenue per key over the window ending at the latest month, then
/// sort by revenue descending with ties broken by name ascending.
fn rank_by<F>(table: &[MonthlyAggregate], ranking: &RankingConfig, key: F) -> Vec<RankedEntry>
where
    F: Fn(&MonthlyAggregate) -> &String,
{
    let Some(latest) = table.iter().map(|row| row.month).max() else {
        return Vec::new();
    };
    let window = i64::from(ranking.last_months);

    let mut totals: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for row in table
        .iter()
        .filter(|row| months_between(row.month, latest) < window)
    {
        totals.entry(key(row).as_str()).or_default().push(row.revenue);
    }

    let mut entries: Vec<RankedEntry> = totals
        .into_iter()
        .map(|(name, mut revenues)| RankedEntry::new(name, stable_sum(&mut revenues)))
        .collect();
    entries.sort_by(|a, b| b.revenue.total_cmp(&a.revenue).then_with(|| a.name.cmp(&b.name)));
    entries.truncate(ranking.limit);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(m: u32, country: &str, category: &str, revenue: f64) -> MonthlyAggregate {
        MonthlyAggregate {
            month: NaiveDate::from_ymd_opt(2024, m, 1).unwrap(),
            country: country.to_string(),
            category: category.to_string(),
            revenue,
            transaction_count: 1,
        }
    }

    fn table() -> Vec<MonthlyAggregate> {
        vec![
            row(1, "Germany", "Furniture", 1000.0),
            row(4, "France", "Stationery", 30.0),
            row(5, "Germany", "Furniture", 20.0),
            row(6, "France", "Stationery", 25.0),
            row(6, "Spain", "Electronics", 40.0),
        ]
    }

    #[test]
    fn test_window_excludes_old_months() {
        // Window covers Apr..Jun; January's 1000 must not count.
        let countries = top_countries(&table(), &RankingConfig::new(3, 10));
        assert_eq!(
            countries,
            vec![
                RankedEntry::new("France", 55.0),
                RankedEntry::new("Spain", 40.0),
                RankedEntry::new("Germany", 20.0),
            ]
        );
    }

    #[test]
    fn test_top_category() {
        let top = top_category(&table(), 3).unwrap();
        assert_eq!(top, RankedEntry::new("Stationery", 55.0));
        let top = top_category(&table(), 6).unwrap();
        assert_eq!(top.name, "Furniture");
    }

    #[test]
    fn test_ties_break_by_name() {
        let table = vec![
            row(6, "Spain", "B", 10.0),
            row(6, "Austria", "A", 10.0),
            row(6, "Italy", "C", 10.0),
        ];
        let names: Vec<String> = top_countries(&table, &RankingConfig::new(1, 10))
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Austria", "Italy", "Spain"]);
        assert_eq!(top_country(&table, 1).unwrap().name, "Austria");
    }

    #[test]
    fn test_limit_and_empty() {
        assert_eq!(top_countries(&table(), &RankingConfig::new(3, 1)).len(), 1);
        assert!(top_countries(&[], &RankingConfig::default()).is_empty());
        assert_eq!(top_country(&[], 3), None);
    }
}
