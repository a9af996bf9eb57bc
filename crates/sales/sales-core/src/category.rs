//! Keyword-rule category inference.

use sales_api::CategoryRules;
use sales_spi::{CategoryClassifier, UNCATEGORIZED};

/// Classifier that evaluates `(keyword, category)` rules in order.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    /// Lowercased keyword paired with its category
    rules: Vec<(String, String)>,
}

impl KeywordClassifier {
    pub fn new(rules: &CategoryRules) -> Self {
        Self {
            rules: rules
                .rules()
                .iter()
                .map(|r| (r.keyword.trim().to_lowercase(), r.category.clone()))
                .collect(),
        }
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(&CategoryRules::default())
    }
}

impl CategoryClassifier for KeywordClassifier {
    fn classify(&self, text: Option<&str>) -> String {
        let Some(text) = text else {
            return UNCATEGORIZED.to_string();
        };
        let text = text.to_lowercase();
        self.rules
            .iter()
            .find(|(keyword, _)| text.contains(keyword.as_str()))
            .map(|(_, category)| category.clone())
            .unwrap_or_else(|| UNCATEGORIZED.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_wins() {
        let rules = CategoryRules::from_pairs(&[("tea", "Drinks"), ("mug", "Kitchen")]);
        let classifier = KeywordClassifier::new(&rules);
        assert_eq!(classifier.classify(Some("Tea Mug")), "Drinks");
        assert_eq!(classifier.classify(Some("Coffee Mug")), "Kitchen");
    }

    #[test]
    fn test_case_insensitive() {
        let rules = CategoryRules::from_pairs(&[("LAPTOP", "Electronics")]);
        let classifier = KeywordClassifier::new(&rules);
        assert_eq!(classifier.classify(Some("gaming laptop 15\"")), "Electronics");
    }

    #[test]
    fn test_no_match_or_missing_text() {
        let classifier = KeywordClassifier::default();
        assert_eq!(classifier.classify(Some("Mystery Box")), UNCATEGORIZED);
        assert_eq!(classifier.classify(None), UNCATEGORIZED);
    }

    #[test]
    fn test_default_rules() {
        let classifier = KeywordClassifier::default();
        assert_eq!(classifier.classify(Some("Desk Lamp")), "Home Decor");
        assert_eq!(classifier.classify(Some("Office Chair")), "Furniture");
        assert_eq!(classifier.classify(Some("Notebook")), "Stationery");
        assert_eq!(classifier.classify(Some("WHITE HANGING HEART T-LIGHT HOLDER")), UNCATEGORIZED);
    }

    #[test]
    fn test_classification_is_repeatable() {
        let classifier = KeywordClassifier::default();
        let first = classifier.classify(Some("Water Bottle"));
        let second = classifier.classify(Some("Water Bottle"));
        assert_eq!(first, second);
        assert_eq!(first, "Kitchen & Dining");
    }
}
