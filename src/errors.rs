use thiserror::Error;

use networth_config::ConfigError;
use networth_core::CoreError;

/// Error type surfaced by the dashboard session and CLI host.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid amount: `{0}`")]
    InvalidAmount(String),
    #[error("Usage: {0}")]
    Usage(String),
}
