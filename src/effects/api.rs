//! Count fetch service.
//!
//! The service is an external collaborator: the store only knows it through
//! [`CountApi`]. Each call is independent and shares no mutable state with
//! the counter slice.

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Latency of [`SimulatedCountApi`] unless configured otherwise.
pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(500);

/// Envelope returned by the count service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResponse {
    pub data: i64,
}

/// Errors the count service can surface.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("Count request rejected: {0}")]
    Rejected(String),

    #[error("Count service unavailable")]
    Unavailable,
}

/// Capability to fetch a count amount.
///
/// Implementations are cloned into every fetch, so they should be cheap
/// handles.
pub trait CountApi: Clone + Send + Sync + 'static {
    fn fetch_count(
        &self,
        amount: i64,
    ) -> impl Future<Output = Result<CountResponse, FetchError>> + Send;
}

/// Simulated network call: waits a fixed delay, then echoes the amount.
///
/// Never fails.
///
/// # Example
///
/// ```rust
/// use tally::effects::{CountApi, SimulatedCountApi};
/// use std::time::Duration;
///
/// # tokio_test_block(async {
/// let api = SimulatedCountApi::with_delay(Duration::ZERO);
/// let response = api.fetch_count(4).await.unwrap();
/// assert_eq!(response.data, 4);
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) {
/// #     tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(f);
/// # }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulatedCountApi {
    delay: Duration,
}

impl SimulatedCountApi {
    /// Service with the default half-second latency.
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_FETCH_DELAY)
    }

    /// Service answering after `delay`.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// Latency applied to every call.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedCountApi {
    fn default() -> Self {
        Self::new()
    }
}

impl CountApi for SimulatedCountApi {
    async fn fetch_count(&self, amount: i64) -> Result<CountResponse, FetchError> {
        tokio::time::sleep(self.delay).await;
        Ok(CountResponse { data: amount })
    }
}
