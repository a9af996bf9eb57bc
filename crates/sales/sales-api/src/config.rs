//! Normalizer and ranking configuration.

use sales_spi::{CanonicalField, Result, SalesError};
use serde::{Deserialize, Serialize};

/// Accepted header aliases per canonical field, in priority order.
///
/// Matching is case-insensitive and ignores surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnAliases {
    pub date: Vec<String>,
    pub quantity: Vec<String>,
    pub price: Vec<String>,
    pub country: Vec<String>,
    pub description: Vec<String>,
}

impl Default for ColumnAliases {
    fn default() -> Self {
        fn owned(names: &[&str]) -> Vec<String> {
            names.iter().map(|n| n.to_string()).collect()
        }
        Self {
            date: owned(&["invoicedate", "invoice_date", "date"]),
            quantity: owned(&["quantity", "qty"]),
            price: owned(&["unitprice", "unit_price", "price"]),
            country: owned(&["country"]),
            description: owned(&["description", "stockcode", "item", "stock_code"]),
        }
    }
}

impl ColumnAliases {
    /// Aliases for `field`.
    pub fn for_field(&self, field: CanonicalField) -> &[String] {
        match field {
            CanonicalField::Date => &self.date,
            CanonicalField::Quantity => &self.quantity,
            CanonicalField::Price => &self.price,
            CanonicalField::Country => &self.country,
            CanonicalField::Description => &self.description,
        }
    }

    /// Replace the aliases for `field`.
    pub fn with_field(mut self, field: CanonicalField, aliases: &[&str]) -> Self {
        let aliases = aliases.iter().map(|a| a.to_string()).collect();
        match field {
            CanonicalField::Date => self.date = aliases,
            CanonicalField::Quantity => self.quantity = aliases,
            CanonicalField::Price => self.price = aliases,
            CanonicalField::Country => self.country = aliases,
            CanonicalField::Description => self.description = aliases,
        }
        self
    }
}

/// A keyword and the category it maps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    /// Case-insensitive substring searched in the description
    pub keyword: String,
    pub category: String,
}

impl CategoryRule {
    pub fn new(keyword: &str, category: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            category: category.to_string(),
        }
    }
}

/// Ordered keyword rules; the first matching rule wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryRules(pub Vec<CategoryRule>);

impl CategoryRules {
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self(rules)
    }

    /// Rules from `(keyword, category)` pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self(
            pairs
                .iter()
                .map(|(keyword, category)| CategoryRule::new(keyword, category))
                .collect(),
        )
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for CategoryRules {
    fn default() -> Self {
        // "lamp" sits above "desk" so "Desk Lamp" lands in Home Decor.
        Self::from_pairs(&[
            ("laptop", "Electronics"),
            ("headphone", "Electronics"),
            ("charger", "Electronics"),
            ("cable", "Electronics"),
            ("mug", "Kitchen & Dining"),
            ("cup", "Kitchen & Dining"),
            ("spoon", "Kitchen & Dining"),
            ("teapot", "Kitchen & Dining"),
            ("bottle", "Kitchen & Dining"),
            ("plate", "Kitchen & Dining"),
            ("lamp", "Home Decor"),
            ("candle", "Home Decor"),
            ("frame", "Home Decor"),
            ("cushion", "Home Decor"),
            ("lantern", "Home Decor"),
            ("chair", "Furniture"),
            ("desk", "Furniture"),
            ("shelf", "Furniture"),
            ("notebook", "Stationery"),
            ("pencil", "Stationery"),
            ("card", "Stationery"),
            ("bag", "Bags & Accessories"),
            ("purse", "Bags & Accessories"),
        ])
    }
}

/// A century of monthly points.
pub const DEFAULT_MAX_MONTHS: usize = 1200;

/// Configuration for the normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Header aliases per canonical field
    pub aliases: ColumnAliases,
    /// Keyword rules for category inference
    pub category_rules: CategoryRules,
    /// chrono format strings tried after RFC 3339, each as date-time then date
    pub date_formats: Vec<String>,
    /// Reject rows with negative quantity instead of keeping them as returns
    pub exclude_returns: bool,
    /// Refuse datasets with more rows than this
    pub max_rows: usize,
    /// Longest first-to-last month span the total series may cover
    pub max_months: usize,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            aliases: ColumnAliases::default(),
            category_rules: CategoryRules::default(),
            date_formats: vec![
                // Two-digit years first: %Y would read "10" as year 10.
                "%m/%d/%y %H:%M".to_string(),
                "%m/%d/%y %H:%M:%S".to_string(),
                "%m/%d/%y".to_string(),
                "%Y-%m-%d %H:%M:%S".to_string(),
                "%Y-%m-%dT%H:%M:%S".to_string(),
                "%Y-%m-%d %H:%M".to_string(),
                "%Y-%m-%d".to_string(),
                "%m/%d/%Y %H:%M".to_string(),
                "%m/%d/%Y %H:%M:%S".to_string(),
                "%m/%d/%Y".to_string(),
                "%Y/%m/%d".to_string(),
            ],
            exclude_returns: false,
            max_rows: 5_000_000,
            max_months: DEFAULT_MAX_MONTHS,
        }
    }
}

impl NormalizerConfig {
    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.max_rows == 0 {
            return Err(invalid("max_rows", "must be positive"));
        }
        if self.max_months == 0 {
            return Err(invalid("max_months", "must be positive"));
        }
        if self.date_formats.is_empty() {
            return Err(invalid("date_formats", "at least one format is required"));
        }
        for field in CanonicalField::ALL {
            if field.is_required() && self.aliases.for_field(field).is_empty() {
                return Err(invalid(
                    &format!("aliases.{}", field),
                    "required field needs at least one alias",
                ));
            }
        }
        if let Some(rule) = self
            .category_rules
            .rules()
            .iter()
            .find(|r| r.keyword.trim().is_empty())
        {
            return Err(invalid(
                "category_rules",
                &format!("empty keyword for category '{}'", rule.category),
            ));
        }
        Ok(())
    }
}

fn invalid(name: &str, reason: &str) -> SalesError {
    SalesError::InvalidConfig {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

/// Builder for NormalizerConfig.
#[derive(Debug, Default)]
pub struct NormalizerConfigBuilder {
    aliases: Option<ColumnAliases>,
    category_rules: Option<CategoryRules>,
    date_formats: Option<Vec<String>>,
    exclude_returns: Option<bool>,
    max_rows: Option<usize>,
    max_months: Option<usize>,
}

impl NormalizerConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the alias table.
    pub fn aliases(mut self, aliases: ColumnAliases) -> Self {
        self.aliases = Some(aliases);
        self
    }

    /// Set the category rules.
    pub fn category_rules(mut self, rules: CategoryRules) -> Self {
        self.category_rules = Some(rules);
        self
    }

    /// Set the accepted date formats.
    pub fn date_formats(mut self, formats: &[&str]) -> Self {
        self.date_formats = Some(formats.iter().map(|f| f.to_string()).collect());
        self
    }

    /// Drop returns instead of keeping them.
    pub fn exclude_returns(mut self, exclude: bool) -> Self {
        self.exclude_returns = Some(exclude);
        self
    }

    /// Set the row limit.
    pub fn max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    /// Set the month span limit.
    pub fn max_months(mut self, max_months: usize) -> Self {
        self.max_months = Some(max_months);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<NormalizerConfig> {
        let defaults = NormalizerConfig::default();
        let config = NormalizerConfig {
            aliases: self.aliases.unwrap_or(defaults.aliases),
            category_rules: self.category_rules.unwrap_or(defaults.category_rules),
            date_formats: self.date_formats.unwrap_or(defaults.date_formats),
            exclude_returns: self.exclude_returns.unwrap_or(defaults.exclude_returns),
            max_rows: self.max_rows.unwrap_or(defaults.max_rows),
            max_months: self.max_months.unwrap_or(defaults.max_months),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Window and size for the top-N reductions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Number of trailing months considered, counting the latest month
    pub last_months: u32,
    /// Maximum entries returned
    pub limit: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            last_months: 3,
            limit: 10,
        }
    }
}

impl RankingConfig {
    pub fn new(last_months: u32, limit: usize) -> Self {
        Self { last_months, limit }
    }

    pub fn validate(&self) -> Result<()> {
        if self.last_months == 0 {
            return Err(invalid("ranking.last_months", "must be at least 1"));
        }
        Ok(())
    }
}
