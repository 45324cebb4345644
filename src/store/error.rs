//! Store configuration errors.

use thiserror::Error;

/// Errors that can occur when loading a [`StoreConfig`](super::StoreConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid store configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Fetch delay {delay_ms}ms exceeds maximum of {max_ms}ms")]
    InvalidDelay { delay_ms: u64, max_ms: u64 },
}
