use serde::{Deserialize, Serialize};

use crate::sketch::{QuantileSketch, QuantileSummary};

/// Distribution metric over a continuous column: quantile summary plus
/// Welford mean/m2 for variance.
#[derive(Debug, Clone)]
pub struct DistributionMetric {
    pub sketch: QuantileSummary,
    pub mean: f64,
    pub m2: f64,
}

impl DistributionMetric {
    pub fn n(&self) -> u64 {
        self.sketch.count()
    }

    /// Sample variance of the stream (m2 / (n - 1)).
    pub fn variance(&self) -> f64 {
        let n = self.n();
        if n <= 1 {
            return 0.0;
        }
        self.m2 / (n - 1) as f64
    }

    pub fn stddev(&self) -> f64 {
        self.variance().sqrt()
    }
}

/// Single ranked entry of a frequent-items summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequentItem {
    pub value: String,
    pub estimate: f64,
}

/// Frequent-items metric over a discrete column, ranked descending by estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequentItemsMetric {
    pub items: Vec<FrequentItem>,
}

/// Row counts for a column, nulls included in `n`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ColumnCountsMetric {
    pub n: u64,
    pub null_count: u64,
}

/// Approximate distinct-value count for a column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CardinalityMetric {
    pub estimate: f64,
}

/// Tagged union of the metric kinds a column view can hold.
#[derive(Debug, Clone)]
pub enum Metric {
    Distribution(DistributionMetric),
    FrequentItems(FrequentItemsMetric),
    Counts(ColumnCountsMetric),
    Cardinality(CardinalityMetric),
}

impl Metric {
    pub fn namespace(&self) -> &'static str {
        match self {
            Metric::Distribution(_) => "dist",
            Metric::FrequentItems(_) => "fi",
            Metric::Counts(_) => "cnt",
            Metric::Cardinality(_) => "card",
        }
    }
}
