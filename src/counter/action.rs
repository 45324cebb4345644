//! Actions understood by the counter slice.

use std::fmt;
use uuid::Uuid;

/// Type prefix shared by every counter action.
pub const SLICE_NAME: &str = "counter";

/// Type prefix of the async fetch thunk's lifecycle actions.
pub const FETCH_COUNT_TYPE: &str = "counter/fetchCount";

/// Lifecycle event of one async fetch.
///
/// All three events of a single thunk invocation carry the same
/// `request_id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchLifecycle {
    Pending { request_id: Uuid, amount: i64 },
    Fulfilled { request_id: Uuid, amount: i64 },
    Rejected { request_id: Uuid, error: String },
}

impl FetchLifecycle {
    /// Request shared by every event of one fetch.
    pub fn request_id(&self) -> Uuid {
        match self {
            Self::Pending { request_id, .. }
            | Self::Fulfilled { request_id, .. }
            | Self::Rejected { request_id, .. } => *request_id,
        }
    }
}

/// Closed set of counter actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    Decrement,
    IncrementByAmount(i64),
    FetchCount(FetchLifecycle),
}

impl CounterAction {
    /// `counter/fetchCount/pending` for the given request.
    pub fn fetch_pending(id: Uuid, amount: i64) -> Self {
        Self::FetchCount(FetchLifecycle::Pending {
            request_id: id,
            amount,
        })
    }

    /// `counter/fetchCount/fulfilled` carrying the fetched amount.
    pub fn fetch_fulfilled(id: Uuid, amount: i64) -> Self {
        Self::FetchCount(FetchLifecycle::Fulfilled {
            request_id: id,
            amount,
        })
    }

    /// `counter/fetchCount/rejected` carrying the error message.
    pub fn fetch_rejected(id: Uuid, error: impl Into<String>) -> Self {
        Self::FetchCount(FetchLifecycle::Rejected {
            request_id: id,
            error: error.into(),
        })
    }

    /// Stable action type string, e.g. `counter/fetchCount/pending`.
    pub fn action_type(&self) -> &'static str {
        match self {
            Self::Increment => "counter/increment",
            Self::Decrement => "counter/decrement",
            Self::IncrementByAmount(_) => "counter/incrementByAmount",
            Self::FetchCount(FetchLifecycle::Pending { .. }) => "counter/fetchCount/pending",
            Self::FetchCount(FetchLifecycle::Fulfilled { .. }) => "counter/fetchCount/fulfilled",
            Self::FetchCount(FetchLifecycle::Rejected { .. }) => "counter/fetchCount/rejected",
        }
    }

    /// Request id for fetch lifecycle actions.
    pub fn request_id(&self) -> Option<Uuid> {
        match self {
            Self::FetchCount(lifecycle) => Some(lifecycle.request_id()),
            _ => None,
        }
    }
}

impl fmt::Display for CounterAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.action_type())
    }
}
