use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Knobs for reducing a column profile into summaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    #[serde(default = "default_max_frequent_items")]
    pub max_frequent_item_size: usize,
    #[serde(default = "default_hll_error_rate")]
    pub hll_error_rate: f64,
    #[serde(default = "default_max_hist_buckets")]
    pub max_hist_buckets: usize,
    #[serde(default = "default_hist_avg_per_bucket")]
    pub hist_avg_number_per_bucket: f64,
}

fn default_max_frequent_items() -> usize {
    32
}
fn default_hll_error_rate() -> f64 {
    0.00813 // ~0.8%
}
fn default_max_hist_buckets() -> usize {
    30
}
fn default_hist_avg_per_bucket() -> f64 {
    4.0
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_frequent_item_size: default_max_frequent_items(),
            hll_error_rate: default_hll_error_rate(),
            max_hist_buckets: default_max_hist_buckets(),
            hist_avg_number_per_bucket: default_hist_avg_per_bucket(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub summary: SummaryConfig,
}

impl Config {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("drift-lens")
            .join("config.toml")
    }

    pub fn load() -> crate::Result<Self> {
        let path = if let Ok(env_path) = std::env::var("DRIFT_LENS_CONFIG") {
            PathBuf::from(env_path) // $DRIFT_LENS_CONFIG overrides default config path
        } else {
            Self::config_path()
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        let cfg: Self =
            toml::from_str(&content).map_err(|e| crate::DriftLensError::Config(e.to_string()))?;
        Ok(cfg)
    }

    pub fn save(&self) -> crate::Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::DriftLensError::Config(e.to_string()))?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}
