//! Fatal errors for the sales stages.

use thiserror::Error;

use crate::model::CanonicalField;

/// Errors that abort normalization or aggregation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SalesError {
    /// A required column could not be resolved from any alias
    #[error(
        "Schema error: no column for required field '{}' (tried: {})",
        .field,
        .aliases.join(", ")
    )]
    Schema {
        field: CanonicalField,
        aliases: Vec<String>,
    },

    /// Input exceeds the configured row limit
    #[error("Dataset too large: {rows} rows exceeds limit of {limit}")]
    DatasetTooLarge { rows: usize, limit: usize },

    /// Observed months span more than the configured limit
    #[error("Series too long: {months} months exceeds limit of {limit}")]
    SeriesTooLong { months: usize, limit: usize },

    /// Configuration value out of range
    #[error("Invalid configuration '{name}': {reason}")]
    InvalidConfig { name: String, reason: String },

    /// Series construction violated the monthly axis invariant
    #[error("Invalid series: {0}")]
    InvalidSeries(String),
}

/// Result type for sales operations.
pub type Result<T> = std::result::Result<T, SalesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_message() {
        let error = SalesError::Schema {
            field: CanonicalField::Price,
            aliases: vec!["unitprice".to_string(), "price".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "Schema error: no column for required field 'price' (tried: unitprice, price)"
        );
    }

    #[test]
    fn test_dataset_too_large_message() {
        let error = SalesError::DatasetTooLarge { rows: 11, limit: 10 };
        assert_eq!(
            error.to_string(),
            "Dataset too large: 11 rows exceeds limit of 10"
        );
    }

    #[test]
    fn test_series_too_long_message() {
        let error = SalesError::SeriesTooLong {
            months: 2401,
            limit: 1200,
        };
        assert_eq!(
            error.to_string(),
            "Series too long: 2401 months exceeds limit of 1200"
        );
    }

    #[test]
    fn test_invalid_config_message() {
        let error = SalesError::InvalidConfig {
            name: "max_rows".to_string(),
            reason: "must be positive".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration 'max_rows': must be positive"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SalesError>();
    }
}
