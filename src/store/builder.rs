//! Builder for configuring a store.

use super::store::Store;
use crate::core::{StatusHistory, DEFAULT_HISTORY_LIMIT};
use crate::counter::CounterState;

/// Fluent builder for [`Store`].
///
/// # Example
///
/// ```rust
/// use tally::counter::CounterState;
/// use tally::effects::SimulatedCountApi;
/// use tally::store::{Dispatch, StoreBuilder};
///
/// let store = StoreBuilder::new(SimulatedCountApi::default())
///     .preloaded_state(CounterState::new(7))
///     .history_limit(32)
///     .build();
///
/// assert_eq!(store.get_state().counter.value, 7);
/// assert_eq!(store.status_history().limit(), 32);
/// ```
pub struct StoreBuilder<A> {
    api: A,
    preloaded: Option<CounterState>,
    history_limit: usize,
}

impl<A> StoreBuilder<A> {
    /// Create a builder around the count service the store will use.
    pub fn new(api: A) -> Self {
        Self {
            api,
            preloaded: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Start from this state instead of `{ value: 0, status: idle }`.
    pub fn preloaded_state(mut self, state: CounterState) -> Self {
        self.preloaded = Some(state);
        self
    }

    /// Keep at most `limit` status changes in the store's history.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Build the store.
    pub fn build(self) -> Store<A> {
        let history = StatusHistory::with_limit(self.history_limit);
        Store::from_parts(self.api, self.preloaded.unwrap_or_default(), history)
    }
}
