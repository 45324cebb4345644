//! Read-only projections from the root state.

use crate::core::{FetchStatus, Guard};
use crate::store::RootState;

/// Current count (pure).
pub fn select_count(state: &RootState) -> i64 {
    state.counter.value
}

/// Current fetch status (pure).
pub fn select_status(state: &RootState) -> FetchStatus {
    state.counter.status
}

/// Guard passing when the count is odd.
///
/// Uses the truncating remainder, so negative counts never pass.
pub fn count_is_odd() -> Guard<RootState> {
    Guard::new(|state: &RootState| select_count(state) % 2 == 1)
}
