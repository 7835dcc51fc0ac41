use std::collections::HashMap;

use crate::metrics::{FrequentItem, FrequentItemsMetric};

/// Counts discrete values and reduces to a ranked frequent-items list.
pub struct FrequentItemsTracker {
    map: HashMap<String, u64>,
    total: u64,
}

impl FrequentItemsTracker {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
            total: 0,
        }
    }

    pub fn track(&mut self, val: &str) {
        *self.map.entry(val.to_owned()).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Ranked descending by estimate; ties break on value for determinism.
    pub fn finish(self) -> FrequentItemsMetric {
        let mut items: Vec<FrequentItem> = self
            .map
            .into_iter()
            .map(|(value, count)| FrequentItem {
                value,
                estimate: count as f64,
            })
            .collect();
        items.sort_by(|a, b| {
            b.estimate
                .partial_cmp(&a.estimate)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.value.cmp(&b.value))
        });
        FrequentItemsMetric { items }
    }
}

impl Default for FrequentItemsTracker {
    fn default() -> Self {
        Self::new()
    }
}
