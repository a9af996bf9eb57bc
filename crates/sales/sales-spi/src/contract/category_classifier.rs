//! Trait for category inference.

/// Maps description text to a category name.
///
/// Implementations must be pure: the same text always yields the same
/// category, with no side effects.
pub trait CategoryClassifier: Send + Sync {
    /// Category for `text`; `None` means the row had no description.
    fn classify(&self, text: Option<&str>) -> String;
}
