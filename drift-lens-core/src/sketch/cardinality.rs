use hyperloglog::HyperLogLog;

use crate::metrics::CardinalityMetric;

/// Distinct-value estimator over a column's raw values.
pub struct CardinalityTracker {
    hll: HyperLogLog,
    tracked: u64,
}

impl CardinalityTracker {
    pub fn new(error_rate: f64) -> Self {
        Self {
            hll: HyperLogLog::new(error_rate),
            tracked: 0,
        }
    }

    pub fn track_bytes(&mut self, val: &[u8]) {
        self.hll.insert(&val);
        self.tracked += 1;
    }

    pub fn tracked(&self) -> u64 {
        self.tracked
    }

    pub fn finish(self) -> CardinalityMetric {
        CardinalityMetric {
            estimate: self.hll.len(),
        }
    }
}
