//! Severity tiers derived from prediction probability.

use serde::{Deserialize, Serialize};

/// Coarse severity bucket for a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    /// Tier from a probability percentage: ≥ 70 severe, ≥ 40 moderate,
    /// else mild. Values outside [0, 100] are not special-cased; the
    /// thresholds apply as given.
    pub fn from_percent(probability: f64) -> Self {
        if probability >= 70.0 {
            Self::Severe
        } else if probability >= 40.0 {
            Self::Moderate
        } else {
            Self::Mild
        }
    }

    /// Lowercase key, as used in backend payloads and recovery lookups.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }

    /// Capitalized badge label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
        }
    }

    /// Badge style class for the rendering surface.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Mild => "sev-mild",
            Self::Moderate => "sev-moderate",
            Self::Severe => "sev-severe",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
