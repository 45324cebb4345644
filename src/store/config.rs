//! Serializable store configuration.

use super::builder::StoreBuilder;
use super::error::ConfigError;
use super::store::Store;
use crate::core::DEFAULT_HISTORY_LIMIT;
use crate::counter::CounterState;
use crate::effects::{SimulatedCountApi, DEFAULT_FETCH_DELAY};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upper bound accepted for the simulated fetch latency.
pub const MAX_FETCH_DELAY_MS: u64 = 60_000;

fn default_fetch_delay_ms() -> u64 {
    DEFAULT_FETCH_DELAY.as_millis() as u64
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

/// Settings for a store backed by [`SimulatedCountApi`].
///
/// # Example
///
/// ```rust
/// use tally::store::{Dispatch, StoreConfig};
///
/// let config = StoreConfig::from_json(r#"{
///     "fetch_delay_ms": 50,
///     "preloaded_state": { "value": 3, "status": "idle" }
/// }"#).unwrap();
///
/// let store = config.build_store().unwrap();
/// assert_eq!(store.get_state().counter.value, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_fetch_delay_ms")]
    pub fetch_delay_ms: u64,

    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    #[serde(default)]
    pub preloaded_state: Option<CounterState>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            fetch_delay_ms: default_fetch_delay_ms(),
            history_limit: default_history_limit(),
            preloaded_state: None,
        }
    }
}

impl StoreConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the fetch delay is within [`MAX_FETCH_DELAY_MS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch_delay_ms > MAX_FETCH_DELAY_MS {
            return Err(ConfigError::InvalidDelay {
                delay_ms: self.fetch_delay_ms,
                max_ms: MAX_FETCH_DELAY_MS,
            });
        }
        Ok(())
    }

    /// Latency of the simulated count service.
    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }

    /// Validate, then build a store over a [`SimulatedCountApi`].
    pub fn build_store(&self) -> Result<Store<SimulatedCountApi>, ConfigError> {
        self.validate()?;

        let api = SimulatedCountApi::with_delay(self.fetch_delay());
        let builder = StoreBuilder::new(api).history_limit(self.history_limit);
        let store = match self.preloaded_state {
            Some(state) => builder.preloaded_state(state).build(),
            None => builder.build(),
        };
        Ok(store)
    }
}
