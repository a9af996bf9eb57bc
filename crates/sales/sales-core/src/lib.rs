//! Sales Core
//!
//! Implementations for the first two pipeline stages:
//!
//! - [`Normalizer`]: resolves column aliases, validates rows, derives
//!   revenue, country and category
//! - [`KeywordClassifier`]: ordered keyword rules for category inference
//! - [`aggregate_monthly`] and [`total_series`]: grouping and the gap-free
//!   total revenue series
//! - [`top_countries`], [`top_categories`]: trailing-window rankings

mod aggregator;
mod category;
mod normalizer;
mod ranking;

pub use aggregator::{aggregate_monthly, stable_sum, total_series};
pub use category::KeywordClassifier;
pub use normalizer::{parse_date, title_case, Normalizer};
pub use ranking::{top_categories, top_category, top_countries, top_country};

// Re-export SPI traits for implementations
pub use sales_spi::{CategoryClassifier, Result, SalesError};
