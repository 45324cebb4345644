//! The root store: owns the state tree and applies dispatched actions.

use super::root::{self, Action, RootState};
use crate::core::{StatusHistory, StatusTransition};
use crate::counter::CounterState;
use crate::effects::CountApi;
use chrono::Utc;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Capability to read the current state and dispatch actions.
///
/// Thunks are written against this trait so they can run on any store.
pub trait Dispatch {
    /// Apply an action and return the resulting snapshot.
    fn dispatch(&self, action: Action) -> Arc<RootState>;

    /// Current snapshot. Never mutated after it is returned.
    fn get_state(&self) -> Arc<RootState>;
}

/// A [`Dispatch`] that also provides the count service async thunks run
/// against.
pub trait FetchDispatch: Dispatch {
    type Api: CountApi;

    /// Count service used by the async fetch.
    fn api(&self) -> &Self::Api;
}

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Listener = Arc<dyn Fn(&RootState) + Send + Sync>;

struct Current {
    root: Arc<RootState>,
    history: StatusHistory,
}

struct Shared {
    current: RwLock<Current>,
    listeners: RwLock<Vec<(Subscription, Listener)>>,
    next_listener: AtomicU64,
    // Held from reduce through notify so listeners see snapshots in
    // dispatch order.
    dispatching: Mutex<()>,
}

/// Store holding the global state tree.
///
/// Cloning a store yields another handle to the same state, so a handle
/// can be passed to every component that needs read or write access.
/// Every dispatch swaps in a fresh snapshot; snapshots already handed out
/// stay unchanged.
///
/// # Example
///
/// ```rust
/// use tally::counter::{select_count, CounterAction};
/// use tally::effects::SimulatedCountApi;
/// use tally::store::{Dispatch, Store};
///
/// let store = Store::new(SimulatedCountApi::default());
/// store.dispatch(CounterAction::Increment.into());
/// store.dispatch(CounterAction::IncrementByAmount(4).into());
///
/// assert_eq!(select_count(&store.get_state()), 5);
/// ```
pub struct Store<A> {
    shared: Arc<Shared>,
    api: A,
}

impl<A> Store<A> {
    /// Create a store in the initial state `{ value: 0, status: idle }`.
    pub fn new(api: A) -> Self {
        Self::from_parts(api, CounterState::default(), StatusHistory::new())
    }

    pub(crate) fn from_parts(api: A, counter: CounterState, history: StatusHistory) -> Self {
        tracing::info!(
            value = counter.value,
            status = %counter.status,
            history_limit = history.limit(),
            "Store created"
        );

        Self {
            shared: Arc::new(Shared {
                current: RwLock::new(Current {
                    root: Arc::new(RootState { counter }),
                    history,
                }),
                listeners: RwLock::new(Vec::new()),
                next_listener: AtomicU64::new(0),
                dispatching: Mutex::new(()),
            }),
            api,
        }
    }

    /// Count service the async thunks run against.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Most recent status changes, bounded by the history limit.
    pub fn status_history(&self) -> StatusHistory {
        self.shared
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .history
            .clone()
    }

    /// Register a listener called with the new snapshot after every dispatch.
    ///
    /// Listeners are called in dispatch order, even when several threads
    /// dispatch at once. They run outside the state lock and may read state,
    /// but must not dispatch.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&RootState) + Send + Sync + 'static,
    {
        let id = self.shared.next_listener.fetch_add(1, Ordering::Relaxed);
        let subscription = Subscription(id);
        self.shared
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((subscription, Arc::new(listener)));

        tracing::trace!(subscription = id, "Listener subscribed");
        subscription
    }

    /// Remove a listener. Returns `false` if it was already removed.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut listeners = self
            .shared
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(id, _)| *id != subscription);
        let removed = listeners.len() != before;

        let id = subscription.0;
        tracing::trace!(subscription = id, removed, "Listener unsubscribed");
        removed
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.shared
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn notify(&self, state: &RootState) {
        let listeners: Vec<Listener> = self
            .shared
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(state);
        }
    }
}

impl<A> Dispatch for Store<A> {
    fn dispatch(&self, action: Action) -> Arc<RootState> {
        let _dispatching = self
            .shared
            .dispatching
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let next = {
            let mut current = self
                .shared
                .current
                .write()
                .unwrap_or_else(PoisonError::into_inner);

            let next = Arc::new(root::reduce(&current.root, &action));

            let (from, to) = (current.root.counter.status, next.counter.status);
            if from != to {
                current.history.push(StatusTransition {
                    from,
                    to,
                    timestamp: Utc::now(),
                    request_id: action.request_id(),
                });
            }

            current.root = Arc::clone(&next);
            next
        };

        tracing::debug!(
            action = action.action_type(),
            value = next.counter.value,
            status = %next.counter.status,
            "Action dispatched"
        );

        self.notify(&next);
        next
    }

    fn get_state(&self) -> Arc<RootState> {
        let current = self
            .shared
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&current.root)
    }
}

impl<A: CountApi> FetchDispatch for Store<A> {
    type Api = A;

    fn api(&self) -> &A {
        &self.api
    }
}

impl<A: Clone> Clone for Store<A> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            api: self.api.clone(),
        }
    }
}

impl<A: fmt::Debug> fmt::Debug for Store<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.get_state())
            .field("api", &self.api)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FetchStatus;
    use crate::counter::CounterAction;
    use std::thread;
    use uuid::Uuid;

    fn store() -> Store<()> {
        Store::new(())
    }

    #[test]
    fn starts_at_zero_and_idle() {
        let state = store().get_state();
        assert_eq!(state.counter, CounterState::default());
        assert_eq!(state.counter.value, 0);
        assert_eq!(state.counter.status, FetchStatus::Idle);
    }

    #[test]
    fn three_increments() {
        let store = store();
        for _ in 0..3 {
            store.dispatch(CounterAction::Increment.into());
        }

        let state = store.get_state();
        assert_eq!(state.counter.value, 3);
        assert_eq!(state.counter.status, FetchStatus::Idle);
    }

    #[test]
    fn snapshots_are_never_mutated() {
        let store = store();
        let before = store.get_state();

        let after = store.dispatch(CounterAction::IncrementByAmount(10).into());

        assert_eq!(before.counter.value, 0);
        assert_eq!(after.counter.value, 10);
        assert!(!Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn get_state_is_stable_without_dispatch() {
        let store = store();
        store.dispatch(CounterAction::Decrement.into());

        let first = store.get_state();
        let second = store.get_state();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn clones_share_state() {
        let store = store();
        let handle = store.clone();

        handle.dispatch(CounterAction::Increment.into());

        assert_eq!(store.get_state().counter.value, 1);
    }

    #[test]
    fn status_changes_are_recorded() {
        let store = store();
        let request_id = Uuid::new_v4();

        store.dispatch(CounterAction::Increment.into());
        store.dispatch(CounterAction::fetch_pending(request_id, 2).into());
        store.dispatch(CounterAction::fetch_fulfilled(request_id, 2).into());

        let history = store.status_history();
        let expected = vec![FetchStatus::Idle, FetchStatus::Loading, FetchStatus::Idle];
        assert_eq!(history.path(), expected);
        for transition in history.transitions() {
            assert_eq!(transition.request_id, Some(request_id));
        }
    }

    #[test]
    fn status_history_is_capped() {
        let history = StatusHistory::with_limit(4);
        let store = Store::from_parts((), CounterState::default(), history);

        for _ in 0..1_000 {
            let request_id = Uuid::new_v4();
            store.dispatch(CounterAction::fetch_pending(request_id, 1).into());
            store.dispatch(CounterAction::fetch_fulfilled(request_id, 1).into());
        }

        let history = store.status_history();
        assert_eq!(history.len(), 4);
        assert_eq!(history.last().map(|t| t.to), Some(FetchStatus::Idle));
        assert_eq!(store.get_state().counter.value, 1_000);
    }

    #[test]
    fn listeners_see_every_dispatch() {
        let store = store();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        store.subscribe(move |state: &RootState| {
            sink.lock().unwrap().push(state.counter.value);
        });

        store.dispatch(CounterAction::Increment.into());
        store.dispatch(CounterAction::IncrementByAmount(5).into());

        assert_eq!(*seen.lock().unwrap(), vec![1, 6]);
    }

    #[test]
    fn listeners_see_dispatch_order_across_threads() {
        let store = store();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        store.subscribe(move |state: &RootState| {
            sink.lock().unwrap().push(state.counter.value);
        });

        let workers: Vec<_> = (0..4)
            .map(|_| {
                let store = store.clone();
                thread::spawn(move || {
                    for _ in 0..250 {
                        store.dispatch(CounterAction::Increment.into());
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        let seen = seen.lock().unwrap();
        let expected: Vec<i64> = (1..=1_000).collect();
        assert_eq!(*seen, expected);
        assert_eq!(seen.last().copied(), Some(store.get_state().counter.value));
    }

    #[test]
    fn listener_may_read_state() {
        let store = store();
        let seen = Arc::new(Mutex::new(None));

        let reader = store.clone();
        let sink = Arc::clone(&seen);
        store.subscribe(move |_: &RootState| {
            *sink.lock().unwrap() = Some(reader.get_state().counter.value);
        });

        store.dispatch(CounterAction::Increment.into());

        assert_eq!(*seen.lock().unwrap(), Some(1));
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let store = store();
        let calls = Arc::new(AtomicU64::new(0));

        let counter = Arc::clone(&calls);
        let subscription = store.subscribe(move |_: &RootState| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.dispatch(CounterAction::Increment.into());
        assert!(store.unsubscribe(subscription));
        assert!(!store.unsubscribe(subscription));
        store.dispatch(CounterAction::Increment.into());

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.listener_count(), 0);
    }
}
