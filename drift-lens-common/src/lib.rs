pub mod config;
pub use config::{Config, SummaryConfig};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriftLensError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(String),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DriftLensError>;
