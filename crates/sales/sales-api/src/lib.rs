//! Sales API
//!
//! Configuration types and builders for the normalizer and the top-N
//! reductions. All values are supplied by the caller; nothing here reads the
//! environment.

mod config;

pub use config::{
    CategoryRule, CategoryRules, ColumnAliases, NormalizerConfig, NormalizerConfigBuilder,
    RankingConfig, DEFAULT_MAX_MONTHS,
};

// Re-export SPI types
pub use sales_spi::{CanonicalField, Result, SalesError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CategoryRule, CategoryRules, ColumnAliases, NormalizerConfig, NormalizerConfigBuilder,
        RankingConfig,
    };
    pub use sales_spi::{CanonicalField, Result, SalesError};
}
