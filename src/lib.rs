//! Tally: a typed counter store with pure reducers
//!
//! Tally follows the "pure core, imperative shell" split. Slice state,
//! reducers, selectors and guards are pure functions over immutable values.
//! The store is the single mutator of the state tree, and the only
//! suspension point is the count fetch, modeled as a Stillwater effect.
//!
//! # Core Concepts
//!
//! - **Slice**: a named subset of the state tree plus its transitions
//!   ([`counter`])
//! - **Action**: a closed enum routed to slice reducers by exhaustive match
//! - **Selector**: a pure projection from [`store::RootState`]
//! - **Thunk**: an action sequence with access to dispatch and current
//!   state ([`effects::increment_if_odd`], [`effects::increment_async`])
//!
//! # Example
//!
//! ```rust
//! use tally::counter::{select_count, select_status, CounterAction};
//! use tally::core::FetchStatus;
//! use tally::effects::{increment_async, increment_if_odd, SimulatedCountApi};
//! use tally::store::{Dispatch, Store};
//! use std::time::Duration;
//!
//! # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
//! let store = Store::new(SimulatedCountApi::with_delay(Duration::from_millis(10)));
//!
//! store.dispatch(CounterAction::Increment.into());
//! increment_if_odd(&store, 10);
//! assert_eq!(select_count(&store.get_state()), 11);
//!
//! increment_async(&store, 4).await.unwrap();
//! assert_eq!(select_count(&store.get_state()), 15);
//! assert_eq!(select_status(&store.get_state()), FetchStatus::Idle);
//! # });
//! ```

pub mod core;
pub mod counter;
pub mod effects;
pub mod store;

// Re-export commonly used types
pub use crate::core::{FetchStatus, Guard, StatusHistory, StatusTransition};
pub use crate::counter::{select_count, select_status, CounterAction, CounterState};
pub use crate::effects::{increment_async, increment_if_odd, CountApi, FetchError};
pub use crate::store::{Action, Dispatch, FetchDispatch, RootState, Store, StoreBuilder};
