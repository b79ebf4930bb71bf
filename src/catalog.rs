//! Age-scoped symptom catalog and its filtered view.
//!
//! The catalog is replaced wholesale on every age change; there is no
//! merging with stale data. Filtering is conjunctive (text AND category)
//! and preserves the catalog's original order.

use crate::classify::{classify, Category};
use crate::config::CATALOG_RENDER_LIMIT;

/// The full symptom list for the current age.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    symptoms: Vec<String>,
}

impl Catalog {
    pub fn new(symptoms: Vec<String>) -> Self {
        Self { symptoms }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    pub fn symptoms(&self) -> &[String] {
        &self.symptoms
    }

    /// The full filtered subsequence, original order preserved.
    pub fn filtered(&self, filter: &CatalogFilter) -> Vec<&str> {
        let query = filter.query.trim().to_lowercase();
        self.symptoms
            .iter()
            .filter(|s| {
                let text_ok = query.is_empty() || s.to_lowercase().contains(&query);
                text_ok && filter.category.admits(s)
            })
            .map(String::as_str)
            .collect()
    }

    /// The filtered view capped at the render window. A display limit
    /// only — `filtered` remains the basis for refiltering.
    pub fn visible(&self, filter: &CatalogFilter) -> Vec<&str> {
        let mut rows = self.filtered(filter);
        rows.truncate(CATALOG_RENDER_LIMIT);
        rows
    }
}

/// Which categories the filter admits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    fn admits(&self, symptom: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(cat) => classify(symptom) == *cat,
        }
    }
}

/// Active filter state: search text plus a category chip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub query: String,
    pub category: CategoryFilter,
}
