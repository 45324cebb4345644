//! The counter slice: state, actions, reducer and selectors.
//!
//! A slice is a self-contained subset of the global state plus the pure
//! logic that transforms it. The store routes [`CounterAction`]s here.

mod action;
mod reducer;
mod selectors;
mod state;

pub use action::{CounterAction, FetchLifecycle, FETCH_COUNT_TYPE, SLICE_NAME};
pub use reducer::reduce;
pub use selectors::{count_is_odd, select_count, select_status};
pub use state::CounterState;
