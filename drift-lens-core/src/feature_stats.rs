//! Human-facing per-column statistics assembled from a profile view.

use serde::{Deserialize, Serialize};

use crate::sketch::QuantileSketch;
use crate::view::ColumnProfileView;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantileStats {
    pub fifth_percentile: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub ninety_fifth_percentile: f64,
    pub iqr: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescStats {
    pub mean: f64,
    pub variance: f64,
    pub stddev: f64,
    pub coefficient_of_variation: f64,
    pub sum: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FeatureStats {
    pub missing: Option<u64>,
    pub distinct: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub range: Option<f64>,
    pub quantile_statistics: Option<QuantileStats>,
    pub descriptive_statistics: Option<DescStats>,
}

/// Assemble feature statistics from whichever metrics the column view holds.
/// Each block is independently optional.
pub fn feature_statistics(column_view: &ColumnProfileView) -> FeatureStats {
    let counts = column_view.counts();
    let missing = counts.map(|c| c.null_count);

    // distinct values as a percentage of non-null rows
    let distinct = match (column_view.cardinality(), counts) {
        (Some(card), Some(c)) if c.n > c.null_count => {
            Some(card.estimate / (c.n - c.null_count) as f64 * 100.0)
        }
        _ => None,
    };

    let dist = column_view.distribution().filter(|d| d.n() > 0);

    let (min, max, range) = match dist {
        Some(d) => {
            let min = d.sketch.min_value();
            let max = d.sketch.max_value();
            (Some(min), Some(max), Some(max - min))
        }
        None => (None, None, None),
    };

    let quantile_statistics = dist.map(|d| {
        let qs = d.sketch.quantiles(&[0.05, 0.25, 0.5, 0.75, 0.95]);
        QuantileStats {
            fifth_percentile: qs[0],
            q1: qs[1],
            median: qs[2],
            q3: qs[3],
            ninety_fifth_percentile: qs[4],
            iqr: qs[3] - qs[1],
        }
    });

    let descriptive_statistics = dist.map(|d| {
        let stddev = d.stddev();
        let sum = counts.map(|c| (c.n - c.null_count) as f64 * d.mean);
        DescStats {
            mean: d.mean,
            variance: d.variance(),
            stddev,
            coefficient_of_variation: if d.mean != 0.0 {
                stddev / d.mean
            } else {
                f64::NAN
            },
            sum,
        }
    });

    FeatureStats {
        missing,
        distinct,
        min,
        max,
        range,
        quantile_statistics,
        descriptive_statistics,
    }
}
