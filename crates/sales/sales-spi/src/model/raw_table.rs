//! Column-addressable table of raw, untyped cells.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical fields the normalizer resolves from input headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    /// Transaction timestamp
    Date,
    /// Units sold; negative for returns
    Quantity,
    /// Price per unit
    Price,
    /// Customer country
    Country,
    /// Free-text description or stock code used for category inference
    Description,
}

impl CanonicalField {
    /// All fields in resolution order.
    pub const ALL: [CanonicalField; 5] = [
        CanonicalField::Date,
        CanonicalField::Quantity,
        CanonicalField::Price,
        CanonicalField::Country,
        CanonicalField::Description,
    ];

    /// Whether a dataset without this field must be refused.
    pub fn is_required(self) -> bool {
        matches!(
            self,
            CanonicalField::Date | CanonicalField::Quantity | CanonicalField::Price
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CanonicalField::Date => "date",
            CanonicalField::Quantity => "quantity",
            CanonicalField::Price => "price",
            CanonicalField::Country => "country",
            CanonicalField::Description => "description",
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A table of string cells as delivered by the ingestion collaborator.
///
/// Rows may be ragged; a missing trailing cell reads as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Create a table from headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Convenience constructor from string slices.
    pub fn from_rows(headers: &[&str], rows: &[&[&str]]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect(),
        }
    }

    /// Append a row.
    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first header equal to `name`, ignoring case and
    /// surrounding whitespace.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let wanted = name.trim().to_lowercase();
        self.headers
            .iter()
            .position(|h| h.trim().to_lowercase() == wanted)
    }

    /// Cell at (`row`, `column`).
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
    }
}
