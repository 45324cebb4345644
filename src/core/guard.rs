//! Guard predicates over state snapshots.
//!
//! A guard is a pure boolean function that decides whether a conditional
//! action should be dispatched. Guards never touch the store; callers feed
//! them the snapshot read at invocation time.

use std::fmt;
use std::sync::Arc;

/// Pure predicate over a state snapshot.
///
/// # Example
///
/// ```rust
/// use tally::core::Guard;
///
/// let is_odd = Guard::new(|value: &i64| value % 2 == 1);
///
/// assert!(is_odd.check(&7));
/// assert!(!is_odd.check(&8));
/// ```
pub struct Guard<T: ?Sized> {
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: ?Sized> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluate the guard against a snapshot.
    pub fn check(&self, state: &T) -> bool {
        (self.predicate)(state)
    }

    /// Guard that passes only when both guards pass.
    pub fn and(self, other: Guard<T>) -> Self
    where
        T: 'static,
    {
        Guard::new(move |state: &T| self.check(state) && other.check(state))
    }

    /// Guard that passes when this one does not.
    pub fn negate(self) -> Self
    where
        T: 'static,
    {
        Guard::new(move |state: &T| !self.check(state))
    }
}

impl<T: ?Sized> Clone for Guard<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
