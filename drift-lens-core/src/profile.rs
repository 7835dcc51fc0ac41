use std::collections::HashMap;

use drift_lens_common::SummaryConfig;

use crate::metrics::{ColumnCountsMetric, DistributionMetric, Metric};
use crate::sketch::{CardinalityTracker, FrequentItemsTracker, QuantileAccumulator};
use crate::view::{ColumnProfileView, DatasetProfileView};

/// Streaming tracker for a single column. Numbers feed the distribution
/// sketch, text feeds the frequent-items counter; both feed cardinality.
pub struct ColumnProfile {
    counts: ColumnCountsMetric,
    quantiles: QuantileAccumulator,
    mean: f64,
    m2: f64,
    frequent: FrequentItemsTracker,
    cardinality: CardinalityTracker,
}

impl ColumnProfile {
    pub fn new(config: &SummaryConfig) -> Self {
        Self {
            counts: ColumnCountsMetric::default(),
            quantiles: QuantileAccumulator::new(),
            mean: 0.0,
            m2: 0.0,
            frequent: FrequentItemsTracker::new(),
            cardinality: CardinalityTracker::new(config.hll_error_rate),
        }
    }

    pub fn track_number(&mut self, v: f64) {
        self.counts.n += 1;
        if v.is_nan() {
            return;
        }
        self.quantiles.add(v);
        let count = self.quantiles.count();
        let delta = v - self.mean;
        self.mean += delta / count as f64;
        self.m2 += delta * (v - self.mean);
        self.cardinality.track_bytes(&v.to_le_bytes());
    }

    pub fn track_text(&mut self, v: &str) {
        self.counts.n += 1;
        self.frequent.track(v);
        self.cardinality.track_bytes(v.as_bytes());
    }

    pub fn track_null(&mut self) {
        self.counts.n += 1;
        self.counts.null_count += 1;
    }

    /// Reduce the tracker into an immutable view. Only metric kinds that saw
    /// data are included, which is what steers per-column drift dispatch.
    pub fn build(self) -> ColumnProfileView {
        let mut metrics = HashMap::new();
        metrics.insert("cnt".to_string(), Metric::Counts(self.counts));
        if self.quantiles.count() > 0 {
            metrics.insert(
                "dist".to_string(),
                Metric::Distribution(DistributionMetric {
                    sketch: self.quantiles.finish(),
                    mean: self.mean,
                    m2: self.m2,
                }),
            );
        }
        if self.frequent.total() > 0 {
            metrics.insert(
                "fi".to_string(),
                Metric::FrequentItems(self.frequent.finish()),
            );
        }
        if self.cardinality.tracked() > 0 {
            metrics.insert(
                "card".to_string(),
                Metric::Cardinality(self.cardinality.finish()),
            );
        }
        ColumnProfileView::new(metrics)
    }
}

/// Streaming tracker for a whole dataset, one [`ColumnProfile`] per column.
pub struct DatasetProfile {
    config: SummaryConfig,
    columns: HashMap<String, ColumnProfile>,
}

impl DatasetProfile {
    pub fn new(config: SummaryConfig) -> Self {
        Self {
            config,
            columns: HashMap::new(),
        }
    }

    pub fn column(&mut self, name: &str) -> &mut ColumnProfile {
        let config = &self.config;
        self.columns
            .entry(name.to_string())
            .or_insert_with(|| ColumnProfile::new(config))
    }

    pub fn build(self) -> DatasetProfileView {
        let columns = self
            .columns
            .into_iter()
            .map(|(name, col)| (name, col.build()))
            .collect();
        DatasetProfileView::new(columns)
    }
}

impl Default for DatasetProfile {
    fn default() -> Self {
        Self::new(SummaryConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_column_exposes_dist_not_fi() {
        let mut profile = DatasetProfile::default();
        for v in [1.0, 2.0, 3.0] {
            profile.column("x").track_number(v);
        }
        let view = profile.build();
        let col = view.get_column("x").unwrap();
        assert!(col.distribution().is_some());
        assert!(col.frequent_items().is_none());
        assert_eq!(col.counts().unwrap().n, 3);
        assert!(col.cardinality().is_some());
    }

    #[test]
    fn text_column_exposes_fi_not_dist() {
        let mut profile = DatasetProfile::default();
        for v in ["cat", "dog", "cat"] {
            profile.column("pet").track_text(v);
        }
        let view = profile.build();
        let col = view.get_column("pet").unwrap();
        assert!(col.distribution().is_none());
        let fi = col.frequent_items().unwrap();
        assert_eq!(fi.items[0].value, "cat");
        assert_eq!(fi.items[0].estimate, 2.0);
    }

    #[test]
    fn mixed_column_keeps_both_metric_kinds() {
        let mut profile = DatasetProfile::default();
        profile.column("messy").track_number(1.0);
        profile.column("messy").track_text("oops");
        let view = profile.build();
        let col = view.get_column("messy").unwrap();
        assert!(col.distribution().is_some());
        let fi = col.frequent_items().unwrap();
        assert_eq!(fi.items[0].value, "oops");
        assert_eq!(col.counts().unwrap().n, 2);
    }

    #[test]
    fn nulls_only_column_has_counts_only() {
        let mut profile = DatasetProfile::default();
        profile.column("empty").track_null();
        profile.column("empty").track_null();
        let view = profile.build();
        let col = view.get_column("empty").unwrap();
        let counts = col.counts().unwrap();
        assert_eq!(counts.n, 2);
        assert_eq!(counts.null_count, 2);
        assert!(col.distribution().is_none());
        assert!(col.frequent_items().is_none());
        assert!(col.cardinality().is_none());
    }
}
