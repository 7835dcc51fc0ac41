//! Approximate two-sample Kolmogorov-Smirnov test over quantile sketches.

use crate::sketch::QuantileSketch;

use super::distributions::kolmogorov_sf;
use super::{ColumnDriftValue, DriftTest};

/// Canonical probe probabilities: tails and body, fixed so the sweep cost is
/// independent of the underlying sketch size.
pub const QUANTILES: [f64; 9] = [0.0, 0.01, 0.05, 0.25, 0.5, 0.75, 0.95, 0.99, 1.0];

/// Estimate the KS statistic from the two sketches' quantile values and CDFs,
/// then evaluate the Kolmogorov null distribution at the effective sample
/// size. The null hypothesis expects both samples to come from the same
/// distribution. `None` when either sketch is empty.
pub fn ks_test_p_value<T, R>(target: &T, reference: &R) -> Option<ColumnDriftValue>
where
    T: QuantileSketch + ?Sized,
    R: QuantileSketch + ?Sized,
{
    let m = target.count();
    let n = reference.count();
    if m == 0 || n == 0 {
        return None;
    }

    let target_quantile_values = target.quantiles(&QUANTILES);
    let ref_quantile_values = reference.quantiles(&QUANTILES);

    let mut d_max: f64 = 0.0;
    let mut cdf_diff_at = |value: f64| {
        let d = (target.cdf(value) - reference.cdf(value)).abs();
        if d > d_max {
            d_max = d;
        }
    };

    // Two-pointer merge over the sorted probe values; ties advance the
    // reference side.
    let (mut i, mut j) = (0, 0);
    while i < target_quantile_values.len() && j < ref_quantile_values.len() {
        let current = if target_quantile_values[i] < ref_quantile_values[j] {
            let v = target_quantile_values[i];
            i += 1;
            v
        } else {
            let v = ref_quantile_values[j];
            j += 1;
            v
        };
        cdf_diff_at(current);
    }
    for &v in &target_quantile_values[i..] {
        cdf_diff_at(v);
    }
    for &v in &ref_quantile_values[j..] {
        cdf_diff_at(v);
    }

    let en = round_half_even(m as f64 * n as f64 / (m + n) as f64);
    let p_value = kolmogorov_sf(d_max, en);
    Some(ColumnDriftValue {
        p_value,
        test: DriftTest::Ks,
    })
}

// half-to-even, so an exact .5 effective size rounds to the nearest even
// integer rather than away from zero
fn round_half_even(x: f64) -> f64 {
    if (x - x.trunc()).abs() == 0.5 {
        (x / 2.0).round() * 2.0
    } else {
        x.round()
    }
}
