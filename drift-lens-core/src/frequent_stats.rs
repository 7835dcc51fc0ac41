//! Reduction of a column view's discrete metrics into a frequent-items
//! summary usable by the Chi-Squared estimator.

use drift_lens_common::SummaryConfig;
use serde::{Deserialize, Serialize};

use crate::view::ColumnProfileView;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequentItemEstimate {
    pub value: String,
    pub estimate: f64,
}

/// Frequent-items view of a discrete column: ranked items plus approximate
/// total and distinct counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequentStats {
    pub frequent_items: Vec<FrequentItemEstimate>,
    pub total_count: u64,
    pub unique_count: u64,
}

/// Combine the `fi`, `cnt` and `card` metrics of a column view into one
/// summary. `None` when any of the three is missing.
pub fn get_frequent_stats(
    column_view: &ColumnProfileView,
    config: &SummaryConfig,
) -> Option<FrequentStats> {
    let fi_metric = column_view.frequent_items()?;
    let Some(counts) = column_view.counts() else {
        tracing::debug!("frequent items present but counts metric missing");
        return None;
    };
    let Some(cardinality) = column_view.cardinality() else {
        tracing::debug!("frequent items present but cardinality metric missing");
        return None;
    };

    let frequent_items = fi_metric
        .items
        .iter()
        .take(config.max_frequent_item_size)
        .map(|item| FrequentItemEstimate {
            value: item.value.clone(),
            estimate: item.estimate,
        })
        .collect();

    Some(FrequentStats {
        frequent_items,
        total_count: counts.n,
        unique_count: cardinality.estimate as u64,
    })
}
