//! Effectful operations around the pure core, using Stillwater 0.11.
//!
//! - **Count service**: the [`CountApi`] capability and its simulated
//!   implementation
//! - **Thunks**: conditional and asynchronous action sequences that read
//!   state and dispatch through the store
//!
//! The async fetch is a Stillwater effect whose environment is the count
//! service, so the only suspension point is running that effect.

mod api;
mod thunk;

pub use api::{CountApi, CountResponse, FetchError, SimulatedCountApi, DEFAULT_FETCH_DELAY};
pub use thunk::{fetch_count, increment_async, increment_if_odd};
