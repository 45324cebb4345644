//! Global state tree and root action routing.

use crate::counter::{self, CounterAction, CounterState};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The single global state tree. Each field is owned by one slice.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct RootState {
    pub counter: CounterState,
}

/// Any action the store accepts, tagged by the slice that handles it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Counter(CounterAction),
}

impl Action {
    /// Stable type string of the wrapped slice action.
    pub fn action_type(&self) -> &'static str {
        match self {
            Self::Counter(action) => action.action_type(),
        }
    }

    /// Fetch request the action belongs to, if any.
    pub fn request_id(&self) -> Option<Uuid> {
        match self {
            Self::Counter(action) => action.request_id(),
        }
    }
}

impl From<CounterAction> for Action {
    fn from(action: CounterAction) -> Self {
        Self::Counter(action)
    }
}

/// Route an action to its slice reducer and assemble the next tree (pure).
pub fn reduce(state: &RootState, action: &Action) -> RootState {
    match action {
        Action::Counter(action) => RootState {
            counter: counter::reduce(&state.counter, action),
        },
    }
}
