//! Contract module containing trait definitions for sales operations

mod category_classifier;

pub use category_classifier::CategoryClassifier;
