pub mod drift;
pub mod feature_stats;
pub mod frequent_stats;
pub mod histogram;
pub mod metrics;
pub mod profile;
pub mod sketch;
pub mod view;

pub use drift::{calculate_drift_values, ColumnDriftValue, DriftTest};
pub use drift_lens_common::{Config, DriftLensError, Result, SummaryConfig};
pub use feature_stats::{feature_statistics, DescStats, FeatureStats, QuantileStats};
pub use frequent_stats::{get_frequent_stats, FrequentItemEstimate, FrequentStats};
pub use histogram::{histogram_from_sketch, HistogramSummary};
pub use metrics::{
    CardinalityMetric, ColumnCountsMetric, DistributionMetric, FrequentItem,
    FrequentItemsMetric, Metric,
};
pub use profile::{ColumnProfile, DatasetProfile};
pub use sketch::{QuantileAccumulator, QuantileSketch, QuantileSummary};
pub use view::{ColumnProfileView, DatasetProfileView};
