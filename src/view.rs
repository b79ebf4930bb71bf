//! Data-only rendering contracts.
//!
//! The crate never draws anything; these types are the narrow interface a
//! table view, a donut-style chart, or a status line consumes. Everything
//! here is plain serializable data.

use serde::Serialize;

use crate::age_group::AgeGroup;
use crate::api::Prediction;
use crate::config::CHART_PALETTE;
use crate::guidance::CareActions;
use crate::severity::Severity;

/// Placeholder shown before an age is entered and after reset.
pub const UNSET_PLACEHOLDER: &str = "—";

/// Severity card contents for the top result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeverityBanner {
    pub severity: Severity,
    /// "Top Disease: {name}"
    pub title: String,
    /// "Probability: {p:.2}%"
    pub detail: String,
}

impl SeverityBanner {
    pub fn for_top(top: &Prediction) -> Self {
        Self {
            severity: Severity::from_percent(top.probability),
            title: format!("Top Disease: {}", top.disease),
            detail: format!("Probability: {:.2}%", top.probability),
        }
    }
}

/// One row of the results table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub disease: String,
    pub probability: f64,
    /// The first row is highlighted.
    pub highlight: bool,
}

impl ResultRow {
    /// "{p:.2}%" cell text.
    pub fn probability_label(&self) -> String {
        format!("{:.2}%", self.probability)
    }
}

/// Series for the proportional chart: parallel labels, values, colors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<&'static str>,
}

impl ChartSpec {
    /// Build a series in the given order, cycling the palette.
    pub fn from_predictions<'a, I>(predictions: I) -> Self
    where
        I: IntoIterator<Item = &'a Prediction>,
    {
        let mut labels = Vec::new();
        let mut values = Vec::new();
        let mut colors = Vec::new();
        for (i, pred) in predictions.into_iter().enumerate() {
            labels.push(pred.disease.clone());
            values.push(pred.probability);
            colors.push(CHART_PALETTE[i % CHART_PALETTE.len()]);
        }
        Self {
            labels,
            values,
            colors,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Derived summary tiles: age group, selection count, model name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub age_group: String,
    pub selected: usize,
    pub model: String,
}

impl SessionSummary {
    pub fn unset() -> Self {
        Self {
            age_group: UNSET_PLACEHOLDER.to_string(),
            selected: 0,
            model: UNSET_PLACEHOLDER.to_string(),
        }
    }

    pub fn for_age(age: Option<u8>, selected: usize) -> Self {
        match age {
            Some(age) => {
                let group = AgeGroup::from_age(age);
                Self {
                    age_group: group.label().to_string(),
                    selected,
                    model: group.model_label().to_string(),
                }
            }
            None => Self {
                selected,
                ..Self::unset()
            },
        }
    }

    /// "{n} selected" counter text.
    pub fn selected_label(&self) -> String {
        format!("{} selected", self.selected)
    }
}

/// Everything a successful prediction renders. Its presence is the signal
/// that the results, guidance, recovery, and export surfaces are shown;
/// its absence hides them all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionView {
    pub banner: SeverityBanner,
    pub description: Option<String>,
    pub table: Vec<ResultRow>,
    pub chart: ChartSpec,
    pub care: CareActions,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pred(disease: &str, probability: f64) -> Prediction {
        Prediction {
            disease: disease.into(),
            probability,
            description: None,
            severity: None,
            remedies: Vec::new(),
            suggestion: None,
            age_group: None,
        }
    }

    #[test]
    fn banner_derives_severity_from_probability() {
        let banner = SeverityBanner::for_top(&pred("Flu", 75.0));
        assert_eq!(banner.severity, Severity::Severe);
        assert_eq!(banner.title, "Top Disease: Flu");
        assert_eq!(banner.detail, "Probability: 75.00%");
    }

    #[test]
    fn row_probability_label_has_two_decimals() {
        let row = ResultRow {
            disease: "Cold".into(),
            probability: 12.5,
            highlight: false,
        };
        assert_eq!(row.probability_label(), "12.50%");
    }

    #[test]
    fn chart_preserves_order_and_cycles_palette() {
        let preds: Vec<Prediction> = (0..12).map(|i| pred(&format!("D{i}"), i as f64)).collect();
        let chart = ChartSpec::from_predictions(preds.iter());
        assert_eq!(chart.len(), 12);
        assert_eq!(chart.labels[0], "D0");
        assert_eq!(chart.labels[11], "D11");
        assert_eq!(chart.colors[10], CHART_PALETTE[0]);
        assert_eq!(chart.colors[11], CHART_PALETTE[1]);
    }

    #[test]
    fn summary_unset_uses_placeholder() {
        let summary = SessionSummary::for_age(None, 2);
        assert_eq!(summary.age_group, UNSET_PLACEHOLDER);
        assert_eq!(summary.model, UNSET_PLACEHOLDER);
        assert_eq!(summary.selected, 2);
    }

    #[test]
    fn summary_for_adult() {
        let summary = SessionSummary::for_age(Some(25), 3);
        assert_eq!(summary.age_group, "Adult");
        assert_eq!(summary.model, "General Medicine");
        assert_eq!(summary.selected_label(), "3 selected");
    }
}
