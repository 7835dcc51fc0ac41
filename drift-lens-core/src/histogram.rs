//! Histogram summaries derived from a quantile sketch's mass function.

use drift_lens_common::SummaryConfig;
use serde::{Deserialize, Serialize};

use crate::sketch::QuantileSketch;

// The digest stores f32-precision values in the worst case; bins narrower
// than the representable interval at the data's magnitude are meaningless.
const F32_MANTISSA_BITS: i32 = 23;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramSummary {
    pub start: f64,
    pub end: f64,
    pub width: f64,
    pub min: f64,
    pub max: f64,
    pub n: u64,
    pub bins: Vec<f64>,
    pub counts: Vec<u64>,
}

/// Bucket a sketch's distribution. Bucket count targets `n / avg_per_bucket`
/// capped at `max_hist_buckets`; n < 2 or a constant column collapses to a
/// single bin.
pub fn histogram_from_sketch<S: QuantileSketch + ?Sized>(
    sketch: &S,
    config: &SummaryConfig,
) -> HistogramSummary {
    let n = sketch.count();
    let start = sketch.min_value();
    let max_val = sketch.max_value();

    if n < 2 || start == max_val {
        let end = start + start.abs() * 1e-7;
        return HistogramSummary {
            start,
            end,
            width: end - start,
            min: start,
            max: max_val,
            n,
            bins: vec![start, end],
            counts: vec![n],
        };
    }

    let (bins, end) = calculate_bins(
        max_val,
        start,
        n,
        config.hist_avg_number_per_bucket,
        config.max_hist_buckets,
    );
    let pmf = sketch.pmf(&bins);
    // The cdf is inclusive at the minimum, so the leading mass is the rows
    // sitting exactly at `start` and belongs in the first bin. The trailing
    // mass above `end` is empty by construction.
    let mut masses = pmf[1..pmf.len() - 1].to_vec();
    masses[0] += pmf[0];
    let counts = masses
        .iter()
        .map(|&p| (p * n as f64).round() as u64)
        .collect();

    HistogramSummary {
        start,
        end,
        width: (end - start) / (bins.len() - 1) as f64,
        min: start,
        max: max_val,
        n,
        bins,
        counts,
    }
}

fn calculate_bins(
    end: f64,
    start: f64,
    n: u64,
    avg_per_bucket: f64,
    max_buckets: usize,
) -> (Vec<f64>, f64) {
    // nudge the upper edge so the max value falls inside the last bin
    let end = end + end.abs() * 1e-7;
    let mut n_buckets = ((n as f64 / avg_per_bucket).ceil() as usize).clamp(1, max_buckets);
    let mut width = (end - start) / n_buckets as f64;

    let max_magnitude = end.abs().max(start.abs());
    if max_magnitude > 0.0 {
        let log_min_interval = max_magnitude.log2().floor() as i32 - F32_MANTISSA_BITS;
        let min_interval = 2.0_f64.powi(log_min_interval);
        if width < min_interval {
            n_buckets = (((end - start) / min_interval).floor() as usize).max(1);
            width = (end - start) / n_buckets as f64;
        }
    }

    let bins = (0..=n_buckets)
        .map(|i| start + i as f64 * width)
        .collect();
    (bins, end)
}
