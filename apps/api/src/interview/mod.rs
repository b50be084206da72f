// Interview answer scoring and session summarization.
// Evaluation is deterministic; LLM enhancement is layered on at the
// transport level and never required for a valid result.

pub mod evaluator;
pub mod handlers;
pub mod summary;
pub mod vocab;

use serde::{Deserialize, Serialize};

/// Interview question category. Drives the length-range and
/// structure-scoring policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Behavioral,
    Technical,
    Situational,
}

impl Category {
    /// Lenient parse from the transport's free-form category string.
    /// Unknown categories are not an error — they fall back to default
    /// scoring policy and are excluded from per-category aggregation.
    pub fn parse(raw: &str) -> Option<Category> {
        match raw.trim().to_lowercase().as_str() {
            "behavioral" => Some(Category::Behavioral),
            "technical" => Some(Category::Technical),
            "situational" => Some(Category::Situational),
            _ => None,
        }
    }

    /// Human-readable label used in strong/weak area reporting.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Behavioral => "Behavioral",
            Category::Technical => "Technical",
            Category::Situational => "Situational",
        }
    }

    /// All known categories, in reporting order.
    pub const ALL: [Category; 3] = [
        Category::Behavioral,
        Category::Technical,
        Category::Situational,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_categories() {
        assert_eq!(Category::parse("behavioral"), Some(Category::Behavioral));
        assert_eq!(Category::parse("technical"), Some(Category::Technical));
        assert_eq!(Category::parse("situational"), Some(Category::Situational));
    }

    #[test]
    fn test_parse_is_case_and_whitespace_insensitive() {
        assert_eq!(Category::parse(" Behavioral "), Some(Category::Behavioral));
        assert_eq!(Category::parse("TECHNICAL"), Some(Category::Technical));
    }

    #[test]
    fn test_parse_unknown_is_none() {
        assert_eq!(Category::parse("brainteaser"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Category::Behavioral).unwrap();
        assert_eq!(json, r#""behavioral""#);
        let parsed: Category = serde_json::from_str(r#""situational""#).unwrap();
        assert_eq!(parsed, Category::Situational);
    }
}
