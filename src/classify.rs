//! Client-side symptom category tagging.
//!
//! Categories are a presentation concern: they drive the filter chips and
//! nothing else. The backend never sees them and is never trusted for them.
//! Classification is an ordered rule cascade — the first matching rule wins,
//! so a symptom that mentions both fever and pain tags as fever.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// One presentation category per symptom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fever,
    Resp,
    Gi,
    Neuro,
    Pain,
    Skin,
    General,
}

impl Category {
    /// All categories, in cascade order, with `General` last.
    pub const ALL: [Category; 7] = [
        Category::Fever,
        Category::Resp,
        Category::Gi,
        Category::Neuro,
        Category::Pain,
        Category::Skin,
        Category::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fever => "fever",
            Self::Resp => "resp",
            Self::Gi => "gi",
            Self::Neuro => "neuro",
            Self::Pain => "pain",
            Self::Skin => "skin",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A compiled keyword rule with the category it assigns.
struct CategoryRule {
    category: Category,
    pattern: Regex,
}

/// Ordered rule cascade. Order is load-bearing: earlier rules shadow later
/// ones, so "fever and body ache" is fever, not pain.
static CATEGORY_RULES: LazyLock<Vec<CategoryRule>> = LazyLock::new(|| {
    vec![
        CategoryRule {
            category: Category::Fever,
            pattern: Regex::new(r"(?i)fever|pyrex|inflammation|chills").unwrap(),
        },
        CategoryRule {
            category: Category::Resp,
            pattern: Regex::new(r"(?i)cough|breath|wheeze|sputum|throat|nose|cold|congestion")
                .unwrap(),
        },
        CategoryRule {
            category: Category::Gi,
            pattern: Regex::new(
                r"(?i)nausea|vomit|diarrhea|abdomen|stomach|constipation|gastric|appetite",
            )
            .unwrap(),
        },
        CategoryRule {
            category: Category::Neuro,
            pattern: Regex::new(r"(?i)headache|dizziness|seizure|confusion|syncope|tingling|numb")
                .unwrap(),
        },
        CategoryRule {
            category: Category::Pain,
            pattern: Regex::new(r"(?i)pain|ache|fatigue|weakness|malaise|cramp").unwrap(),
        },
        CategoryRule {
            category: Category::Skin,
            pattern: Regex::new(r"(?i)rash|itch|lesion|skin|eruption|hive").unwrap(),
        },
    ]
});

/// Tag a symptom with its presentation category. Falls through to
/// `General` when no rule matches.
pub fn classify(symptom: &str) -> Category {
    CATEGORY_RULES
        .iter()
        .find(|rule| rule.pattern.is_match(symptom))
        .map(|rule| rule.category)
        .unwrap_or(Category::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_example_per_category() {
        assert_eq!(classify("High Fever"), Category::Fever);
        assert_eq!(classify("Dry Cough"), Category::Resp);
        assert_eq!(classify("Nausea"), Category::Gi);
        assert_eq!(classify("Dizziness"), Category::Neuro);
        assert_eq!(classify("Joint Pain"), Category::Pain);
        assert_eq!(classify("Skin Rash"), Category::Skin);
        assert_eq!(classify("Restlessness"), Category::General);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("FEVER"), Category::Fever);
        assert_eq!(classify("wHeEzE"), Category::Resp);
    }

    #[test]
    fn earlier_rule_wins_over_later() {
        // Matches both the fever and pain rules; fever is earlier.
        assert_eq!(classify("fever and body ache"), Category::Fever);
        // Matches both the pain and skin rules; pain is earlier.
        assert_eq!(classify("skin pain"), Category::Pain);
    }

    #[test]
    fn substring_matches_count() {
        // "pyrexia" contains "pyrex", "numbness" contains "numb".
        assert_eq!(classify("Pyrexia"), Category::Fever);
        assert_eq!(classify("Numbness in hands"), Category::Neuro);
    }

    #[test]
    fn unmatched_falls_through_to_general() {
        assert_eq!(classify(""), Category::General);
        assert_eq!(classify("Blurred Vision"), Category::General);
    }

    #[test]
    fn category_keys_are_lowercase() {
        for cat in Category::ALL {
            assert_eq!(cat.as_str(), cat.as_str().to_lowercase());
        }
    }
}
