pub mod cardinality;
pub mod frequent;
pub mod quantile;

pub use cardinality::CardinalityTracker;
pub use frequent::FrequentItemsTracker;
pub use quantile::{QuantileAccumulator, QuantileSummary};

/// Capability set of a quantile sketch over a continuous feature.
///
/// Any bounded-memory summary exposing rank/quantile queries can back the
/// continuous drift estimator; the concrete type is never inspected.
pub trait QuantileSketch {
    /// Value at the given quantile probability in [0, 1].
    /// Non-decreasing for non-decreasing probabilities.
    fn quantile(&self, probability: f64) -> f64;

    /// Empirical CDF at `value`. Non-decreasing in `value`.
    fn cdf(&self, value: f64) -> f64;

    /// Total number of items ingested.
    fn count(&self) -> u64;

    fn min_value(&self) -> f64;

    fn max_value(&self) -> f64;

    fn quantiles(&self, probabilities: &[f64]) -> Vec<f64> {
        probabilities.iter().map(|&p| self.quantile(p)).collect()
    }

    /// Probability mass between consecutive split points, with leading and
    /// trailing masses for the open intervals below and above. Returns
    /// `split_points.len() + 1` entries.
    fn pmf(&self, split_points: &[f64]) -> Vec<f64> {
        let mut masses = Vec::with_capacity(split_points.len() + 1);
        let mut prev = 0.0;
        for &s in split_points {
            let c = self.cdf(s);
            masses.push((c - prev).max(0.0));
            prev = c;
        }
        masses.push((1.0 - prev).max(0.0));
        masses
    }
}
