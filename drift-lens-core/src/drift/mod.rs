//! Per-column drift between a target and a reference profile view.

pub mod chi_squared;
pub mod distributions;
pub mod ks;

pub use chi_squared::chi_squared_p_value;
pub use ks::{ks_test_p_value, QUANTILES};

use std::collections::HashMap;

use drift_lens_common::SummaryConfig;
use serde::{Deserialize, Serialize};

use crate::frequent_stats::get_frequent_stats;
use crate::view::DatasetProfileView;

/// Which statistical test produced a drift value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriftTest {
    #[serde(rename = "ks")]
    Ks,
    #[serde(rename = "chi-squared")]
    ChiSquared,
}

/// Drift result for one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnDriftValue {
    pub p_value: f64,
    pub test: DriftTest,
}

/// Compute per-column drift values between two profile views.
///
/// Columns present on both sides dispatch on metric kind: a distribution
/// metric on both sides runs the KS test, otherwise a frequent-items metric
/// on both sides runs the Chi-Squared test. Columns with no matching kind are
/// omitted; degenerate inputs map to a `None` entry.
pub fn calculate_drift_values(
    target_view: &DatasetProfileView,
    reference_view: &DatasetProfileView,
) -> HashMap<String, Option<ColumnDriftValue>> {
    let config = SummaryConfig::default();
    let mut drift_values = HashMap::new();

    for (column_name, target_col) in target_view.get_columns() {
        let Some(ref_col) = reference_view.get_column(column_name) else {
            continue;
        };

        if let (Some(target_dist), Some(ref_dist)) =
            (target_col.distribution(), ref_col.distribution())
        {
            let value = ks_test_p_value(&target_dist.sketch, &ref_dist.sketch);
            drift_values.insert(column_name.clone(), value);
        } else if target_col.frequent_items().is_some() && ref_col.frequent_items().is_some() {
            let target_stats = get_frequent_stats(target_col, &config);
            let ref_stats = get_frequent_stats(ref_col, &config);
            let value = match (target_stats, ref_stats) {
                (Some(t), Some(r)) => chi_squared_p_value(&t, &r),
                _ => None,
            };
            drift_values.insert(column_name.clone(), value);
        } else {
            tracing::debug!(column = %column_name, "no metric kind shared by both profiles");
        }
    }

    drift_values
}
