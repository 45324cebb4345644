//! Counter slice reducer.

use super::action::{CounterAction, FetchLifecycle};
use super::state::CounterState;

/// Compute the next counter state for an action (pure).
///
/// Routing is an exhaustive match, so adding an action variant without
/// handling it here fails to compile.
pub fn reduce(state: &CounterState, action: &CounterAction) -> CounterState {
    match action {
        CounterAction::Increment => state.increment(),
        CounterAction::Decrement => state.decrement(),
        CounterAction::IncrementByAmount(amount) => state.increment_by_amount(*amount),
        CounterAction::FetchCount(FetchLifecycle::Pending { .. }) => state.fetch_pending(),
        CounterAction::FetchCount(FetchLifecycle::Fulfilled { amount, .. }) => {
            state.fetch_fulfilled(*amount)
        }
        CounterAction::FetchCount(FetchLifecycle::Rejected { .. }) => state.fetch_failed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FetchStatus;
    use uuid::Uuid;

    fn apply_all(actions: &[CounterAction]) -> CounterState {
        let mut state = CounterState::default();
        for action in actions {
            state = reduce(&state, action);
        }
        state
    }

    #[test]
    fn three_increments() {
        let state = apply_all(&[
            CounterAction::Increment,
            CounterAction::Increment,
            CounterAction::Increment,
        ]);

        assert_eq!(state.value, 3);
        assert_eq!(state.status, FetchStatus::Idle);
    }

    #[test]
    fn increment_by_amount_from_two() {
        let action = CounterAction::IncrementByAmount(5);
        let state = reduce(&CounterState::new(2), &action);

        assert_eq!(state.value, 7);
    }

    #[test]
    fn decrement_below_zero() {
        let state = reduce(&CounterState::default(), &CounterAction::Decrement);
        assert_eq!(state.value, -1);
    }

    #[test]
    fn fetch_lifecycle_routes_to_transitions() {
        let request_id = Uuid::new_v4();
        let start = CounterState::new(1);

        let pending = reduce(&start, &CounterAction::fetch_pending(request_id, 4));
        assert_eq!(pending.value, 1);
        assert_eq!(pending.status, FetchStatus::Loading);

        let fulfilled = reduce(&pending, &CounterAction::fetch_fulfilled(request_id, 4));
        assert_eq!(fulfilled.value, 5);
        assert_eq!(fulfilled.status, FetchStatus::Idle);
    }

    #[test]
    fn rejected_sets_failed_and_keeps_value() {
        let request_id = Uuid::new_v4();
        let pending = reduce(
            &CounterState::new(9),
            &CounterAction::fetch_pending(request_id, 4),
        );
        let rejected = reduce(
            &pending,
            &CounterAction::fetch_rejected(request_id, "service unavailable"),
        );

        assert_eq!(rejected.value, 9);
        assert_eq!(rejected.status, FetchStatus::Failed);
    }
}
