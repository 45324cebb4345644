//! Counter slice state and its pure transitions.

use crate::core::FetchStatus;
use serde::{Deserialize, Serialize};

/// State owned by the counter slice.
///
/// Every transition takes `&self` and returns a new value; a published
/// snapshot is never mutated. Arithmetic saturates at the `i64` bounds.
///
/// # Example
///
/// ```rust
/// use tally::counter::CounterState;
/// use tally::core::FetchStatus;
///
/// let state = CounterState::default().increment().increment_by_amount(5);
/// assert_eq!(state.value, 6);
/// assert_eq!(state.status, FetchStatus::Idle);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct CounterState {
    pub value: i64,
    pub status: FetchStatus,
}

impl CounterState {
    /// Create an idle state holding `value`.
    pub fn new(value: i64) -> Self {
        Self {
            value,
            status: FetchStatus::Idle,
        }
    }

    /// Add one to the value.
    pub fn increment(&self) -> Self {
        self.increment_by_amount(1)
    }

    /// Subtract one from the value.
    pub fn decrement(&self) -> Self {
        Self {
            value: self.value.saturating_sub(1),
            ..*self
        }
    }

    /// Add `amount` to the value. The status is untouched.
    pub fn increment_by_amount(&self, amount: i64) -> Self {
        Self {
            value: self.value.saturating_add(amount),
            ..*self
        }
    }

    /// A fetch started. The value is untouched.
    pub fn fetch_pending(&self) -> Self {
        Self {
            status: self.status.started(),
            ..*self
        }
    }

    /// A fetch resolved with `amount`.
    pub fn fetch_fulfilled(&self, amount: i64) -> Self {
        Self {
            value: self.value.saturating_add(amount),
            status: self.status.succeeded(),
        }
    }

    /// A fetch was rejected. The value is untouched.
    pub fn fetch_failed(&self) -> Self {
        Self {
            status: self.status.failed(),
            ..*self
        }
    }
}
