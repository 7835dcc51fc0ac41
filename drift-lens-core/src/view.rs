use std::collections::HashMap;

use crate::metrics::{
    CardinalityMetric, ColumnCountsMetric, DistributionMetric, FrequentItemsMetric, Metric,
};

/// Immutable per-column container of named metrics.
#[derive(Debug, Clone, Default)]
pub struct ColumnProfileView {
    metrics: HashMap<String, Metric>,
}

impl ColumnProfileView {
    pub fn new(metrics: HashMap<String, Metric>) -> Self {
        Self { metrics }
    }

    pub fn get_metric(&self, namespace: &str) -> Option<&Metric> {
        self.metrics.get(namespace)
    }

    pub fn distribution(&self) -> Option<&DistributionMetric> {
        match self.metrics.get("dist") {
            Some(Metric::Distribution(d)) => Some(d),
            _ => None,
        }
    }

    pub fn frequent_items(&self) -> Option<&FrequentItemsMetric> {
        match self.metrics.get("fi") {
            Some(Metric::FrequentItems(f)) => Some(f),
            _ => None,
        }
    }

    pub fn counts(&self) -> Option<&ColumnCountsMetric> {
        match self.metrics.get("cnt") {
            Some(Metric::Counts(c)) => Some(c),
            _ => None,
        }
    }

    pub fn cardinality(&self) -> Option<&CardinalityMetric> {
        match self.metrics.get("card") {
            Some(Metric::Cardinality(c)) => Some(c),
            _ => None,
        }
    }
}

/// Immutable view over a profiled dataset, one column view per column name.
#[derive(Debug, Clone, Default)]
pub struct DatasetProfileView {
    columns: HashMap<String, ColumnProfileView>,
}

impl DatasetProfileView {
    pub fn new(columns: HashMap<String, ColumnProfileView>) -> Self {
        Self { columns }
    }

    pub fn get_columns(&self) -> &HashMap<String, ColumnProfileView> {
        &self.columns
    }

    pub fn get_column(&self, name: &str) -> Option<&ColumnProfileView> {
        self.columns.get(name)
    }
}
