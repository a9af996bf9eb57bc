//! Column resolution and row validation.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use sales_api::NormalizerConfig;
use sales_spi::{
    CanonicalField, CategoryClassifier, CleanTransaction, NormalizedBatch, RawTable,
    RejectionReason, Result, RowRejection, SalesError, UNKNOWN_COUNTRY,
};
use tracing::{debug, info, warn};

use crate::category::KeywordClassifier;

/// Column indices for each canonical field.
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    date: usize,
    quantity: usize,
    price: usize,
    country: Option<usize>,
    description: Option<usize>,
}

/// Turns a [`RawTable`] into clean transactions plus row rejections.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: NormalizerConfig,
    classifier: KeywordClassifier,
}

impl Normalizer {
    /// Create a normalizer after validating `config`.
    pub fn new(config: NormalizerConfig) -> Result<Self> {
        config.validate()?;
        let classifier = KeywordClassifier::new(&config.category_rules);
        Ok(Self { config, classifier })
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize every row of `table`.
    ///
    /// Fails only for dataset-level problems (unresolvable required column,
    /// row limit exceeded). Row-level problems end up in
    /// [`NormalizedBatch::rejections`].
    pub fn normalize(&self, table: &RawTable) -> Result<NormalizedBatch> {
        if table.row_count() > self.config.max_rows {
            return Err(SalesError::DatasetTooLarge {
                rows: table.row_count(),
                limit: self.config.max_rows,
            });
        }

        let (columns, resolved_columns) = self.resolve_columns(table)?;
        debug!(?resolved_columns, "resolved input columns");

        let mut transactions = Vec::with_capacity(table.row_count());
        let mut rejections = Vec::new();
        for (index, _) in table.rows().iter().enumerate() {
            match self.parse_row(table, index, columns) {
                Ok(transaction) => transactions.push(transaction),
                Err(reason) => rejections.push(RowRejection {
                    row: index + 1,
                    reason,
                }),
            }
        }

        if !rejections.is_empty() {
            warn!(
                rejected = rejections.len(),
                first = %rejections[0],
                "rows rejected during normalization"
            );
        }
        info!(
            accepted = transactions.len(),
            rejected = rejections.len(),
            "normalization complete"
        );

        Ok(NormalizedBatch {
            transactions,
            rejections,
            resolved_columns,
        })
    }

    fn resolve_columns(
        &self,
        table: &RawTable,
    ) -> Result<(ColumnMap, Vec<(CanonicalField, String)>)> {
        let mut resolved = Vec::new();
        let mut lookup = |field: CanonicalField| -> Option<usize> {
            let aliases = self.config.aliases.for_field(field);
            let index = aliases.iter().find_map(|alias| table.column_index(alias))?;
            resolved.push((field, table.headers()[index].clone()));
            Some(index)
        };

        let date = lookup(CanonicalField::Date);
        let quantity = lookup(CanonicalField::Quantity);
        let price = lookup(CanonicalField::Price);
        let country = lookup(CanonicalField::Country);
        let description = lookup(CanonicalField::Description);

        let required = |field: CanonicalField, index: Option<usize>| {
            index.ok_or_else(|| SalesError::Schema {
                field,
                aliases: self.config.aliases.for_field(field).to_vec(),
            })
        };

        let columns = ColumnMap {
            date: required(CanonicalField::Date, date)?,
            quantity: required(CanonicalField::Quantity, quantity)?,
            price: required(CanonicalField::Price, price)?,
            country,
            description,
        };
        Ok((columns, resolved))
    }

    fn parse_row(
        &self,
        table: &RawTable,
        row: usize,
        columns: ColumnMap,
    ) -> std::result::Result<CleanTransaction, RejectionReason> {
        let required = move |field: CanonicalField, column: usize| {
            non_empty(table.cell(row, column)).ok_or(RejectionReason::MissingValue { field })
        };

        let raw_date = required(CanonicalField::Date, columns.date)?;
        let timestamp = parse_date(raw_date, &self.config.date_formats).ok_or_else(|| {
            RejectionReason::UnparseableDate {
                value: raw_date.to_string(),
            }
        })?;

        let raw_quantity = required(CanonicalField::Quantity, columns.quantity)?;
        let quantity =
            parse_quantity(raw_quantity).ok_or_else(|| RejectionReason::NonNumericQuantity {
                value: raw_quantity.to_string(),
            })?;

        let raw_price = required(CanonicalField::Price, columns.price)?;
        let unit_price = parse_price(raw_price).ok_or_else(|| RejectionReason::NonNumericPrice {
            value: raw_price.to_string(),
        })?;
        if unit_price < 0.0 {
            return Err(RejectionReason::NegativePrice { value: unit_price });
        }

        if quantity < 0 && self.config.exclude_returns {
            return Err(RejectionReason::ReturnExcluded { quantity });
        }

        let revenue = quantity as f64 * unit_price;
        if !revenue.is_finite() {
            return Err(RejectionReason::NonFiniteRevenue);
        }

        let country = columns
            .country
            .and_then(|column| non_empty(table.cell(row, column)))
            .map(title_case)
            .unwrap_or_else(|| UNKNOWN_COUNTRY.to_string());

        let description = columns
            .description
            .and_then(|column| non_empty(table.cell(row, column)))
            .map(str::to_string);
        let category = self.classifier.classify(description.as_deref());

        Ok(CleanTransaction {
            timestamp,
            quantity,
            unit_price,
            revenue,
            country,
            category,
            description,
        })
    }
}

fn non_empty(cell: Option<&str>) -> Option<&str> {
    cell.map(str::trim).filter(|c| !c.is_empty())
}

/// Parse a timestamp: RFC 3339 first, then each format as a date-time and
/// as a plain date (midnight).
pub fn parse_date(value: &str, formats: &[String]) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    formats.iter().find_map(|format| {
        NaiveDateTime::parse_from_str(value, format)
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(value, format)
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
    })
}

/// Integer quantity; decimals are accepted only with a zero fraction.
fn parse_quantity(value: &str) -> Option<i64> {
    if let Ok(quantity) = value.parse::<i64>() {
        return Some(quantity);
    }
    let float = value.parse::<f64>().ok()?;
    let in_range = float >= i64::MIN as f64 && float <= i64::MAX as f64;
    (float.is_finite() && float.fract() == 0.0 && in_range).then(|| float as i64)
}

fn parse_price(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|p| p.is_finite())
}

/// Uppercase the first letter of each whitespace-separated word and
/// lowercase the rest.
pub fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
