//! Assembles the prediction view from a backend response.
//!
//! Rendering order is fixed: the table takes at most the first four of the
//! "other" predictions (ranked by the backend, never re-sorted here), and
//! the chart series is `[top, ...others]` with the top always first. The
//! same capped "others" slice feeds both surfaces.

use crate::api::Prediction;
use crate::config::OTHERS_TABLE_LIMIT;
use crate::guidance::resolve_actions;
use crate::view::{ChartSpec, PredictionView, ResultRow, SeverityBanner};

/// Build the full render plan for a successful prediction.
pub fn build_view(top: &Prediction, others: &[Prediction]) -> PredictionView {
    let shown = &others[..others.len().min(OTHERS_TABLE_LIMIT)];

    let table = shown
        .iter()
        .enumerate()
        .map(|(i, pred)| ResultRow {
            disease: pred.disease.clone(),
            probability: pred.probability,
            highlight: i == 0,
        })
        .collect();

    let chart = ChartSpec::from_predictions(std::iter::once(top).chain(shown.iter()));

    PredictionView {
        banner: SeverityBanner::for_top(top),
        description: top.description.clone(),
        table,
        chart,
        care: resolve_actions(top),
    }
}
