use tdigest::TDigest;

use super::QuantileSketch;

const BUFFER_CAP: usize = 1024;
const CDF_BISECTION_STEPS: usize = 48;

/// Streaming builder for a [`QuantileSummary`]. Buffers values and merges them
/// into a t-digest in batches.
pub struct QuantileAccumulator {
    digest: TDigest,
    values_buf: Vec<f64>,
    count: u64,
    min: f64,
    max: f64,
}

impl QuantileAccumulator {
    pub fn new() -> Self {
        Self {
            digest: TDigest::new_with_size(100),
            values_buf: Vec::new(),
            count: 0,
            min: f64::MAX,
            max: f64::MIN,
        }
    }

    pub fn add(&mut self, v: f64) {
        if v.is_nan() {
            return;
        }
        self.values_buf.push(v);
        if v < self.min {
            self.min = v;
        }
        if v > self.max {
            self.max = v;
        }
        self.count += 1;
        if self.values_buf.len() >= BUFFER_CAP {
            self.flush();
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    fn flush(&mut self) {
        if self.values_buf.is_empty() {
            return;
        }
        // merge_unsorted is a method on &self returning a new TDigest
        let merged = self
            .digest
            .merge_unsorted(self.values_buf.drain(..).collect());
        self.digest = merged;
    }

    pub fn finish(mut self) -> QuantileSummary {
        self.flush();
        QuantileSummary {
            digest: self.digest,
            count: self.count,
            min: self.min,
            max: self.max,
        }
    }
}

impl Default for QuantileAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable quantile summary of a continuous stream, backed by a t-digest.
#[derive(Debug, Clone)]
pub struct QuantileSummary {
    digest: TDigest,
    count: u64,
    min: f64,
    max: f64,
}

impl QuantileSketch for QuantileSummary {
    fn quantile(&self, probability: f64) -> f64 {
        if self.count == 0 {
            return f64::NAN;
        }
        if probability <= 0.0 {
            return self.min;
        }
        if probability >= 1.0 {
            return self.max;
        }
        self.digest
            .estimate_quantile(probability)
            .clamp(self.min, self.max)
    }

    /// Rank of `value`, recovered by bisecting the digest's quantile function.
    /// Monotone in `value` because the quantile function is monotone in p.
    fn cdf(&self, value: f64) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        if value < self.min {
            return 0.0;
        }
        if value >= self.max {
            return 1.0;
        }
        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        for _ in 0..CDF_BISECTION_STEPS {
            let mid = 0.5 * (lo + hi);
            if self.quantile(mid) <= value {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        lo
    }

    fn count(&self) -> u64 {
        self.count
    }

    fn min_value(&self) -> f64 {
        self.min
    }

    fn max_value(&self) -> f64 {
        self.max
    }
}
