//! Care guidance: which actions a prediction offers and what each shows.
//!
//! Mild and moderate results offer home remedies plus a suggestion; severe
//! results (and anything unrecognized) withhold remedies even when the data
//! carries a remedies list. No result at all hides the whole surface — the
//! session only resolves actions when a top prediction exists.

use serde::Serialize;

use crate::api::Prediction;

pub const NO_REMEDIES_MSG: &str = "No home remedies available.";
pub const NO_SUGGESTION_MSG: &str = "No suggestion available.";

/// Which guidance actions are offered for a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CareActions {
    pub offer_remedies: bool,
    pub offer_suggestion: bool,
}

/// Content shown when a guidance action is taken.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "body")]
pub enum CarePanel {
    /// Ordered home remedies list.
    Remedies(Vec<String>),
    /// Fixed fallback notice.
    Notice(String),
    Suggestion(String),
}

/// Resolve the offered actions from the result's severity label.
/// Unrecognized labels are treated like severe: suggestion only.
pub fn resolve_actions(prediction: &Prediction) -> CareActions {
    let offer_remedies = matches!(prediction.severity_key().as_str(), "mild" | "moderate");
    CareActions {
        offer_remedies,
        offer_suggestion: true,
    }
}

/// Panel for the remedies action. An empty list yields an explicit
/// notice rather than an empty rendering.
pub fn remedies_panel(prediction: &Prediction) -> CarePanel {
    if prediction.remedies.is_empty() {
        CarePanel::Notice(NO_REMEDIES_MSG.to_string())
    } else {
        CarePanel::Remedies(prediction.remedies.clone())
    }
}

/// Panel for the suggestion action, with the fixed fallback when absent.
pub fn suggestion_panel(prediction: &Prediction) -> CarePanel {
    let text = prediction
        .suggestion
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| NO_SUGGESTION_MSG.to_string());
    CarePanel::Suggestion(text)
}
