//! Approximate Chi-Squared test over frequent-items summaries.

use std::collections::HashMap;

use crate::frequent_stats::FrequentStats;

use super::distributions::chi_squared_sf;
use super::{ColumnDriftValue, DriftTest};

/// Estimate the Chi-Squared statistic of the target's frequent items against
/// the reference's item proportions. Only items ranked in the target's
/// frequent list are compared; the question asked is whether the target has
/// drifted away from the reference, not a symmetric distance.
///
/// A target value with zero expected frequency under the reference is maximal
/// evidence of drift: the statistic becomes infinite and the sweep stops.
/// `None` when either side has a zero total count.
pub fn chi_squared_p_value(
    target: &FrequentStats,
    reference: &FrequentStats,
) -> Option<ColumnDriftValue> {
    if reference.total_count == 0 || target.total_count == 0 {
        return None;
    }

    let ref_items: HashMap<&str, f64> = reference
        .frequent_items
        .iter()
        .map(|item| (item.value.as_str(), item.estimate))
        .collect();

    let mut chi_sq = 0.0_f64;
    for item in &target.frequent_items {
        let expected = match ref_items.get(item.value.as_str()) {
            Some(&ref_estimate) => {
                let proportion = ref_estimate / reference.total_count as f64;
                (proportion * target.total_count as f64) as u64
            }
            None => 0,
        };
        if expected == 0 {
            chi_sq = f64::INFINITY;
            break;
        }
        let expected = expected as f64;
        chi_sq += (item.estimate - expected).powi(2) / expected;
    }

    let degrees_of_freedom = target.unique_count.saturating_sub(1).max(1);
    let p_value = chi_squared_sf(chi_sq, degrees_of_freedom);
    Some(ColumnDriftValue {
        p_value,
        test: DriftTest::ChiSquared,
    })
}
