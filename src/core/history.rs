//! Status transition history.
//!
//! The store appends a record every time a dispatched action changes the
//! fetch status. Like a devtools action log, the history keeps at most
//! `limit` records and drops the oldest once full, so its size and the cost
//! of appending stay bounded for the lifetime of a store.

use super::status::FetchStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Number of records kept unless configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

fn default_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

/// Record of a single status change.
///
/// # Example
///
/// ```rust
/// use tally::core::{FetchStatus, StatusTransition};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let transition = StatusTransition {
///     from: FetchStatus::Idle,
///     to: FetchStatus::Loading,
///     timestamp: Utc::now(),
///     request_id: Some(Uuid::new_v4()),
/// };
/// assert!(transition.to.is_loading());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusTransition {
    /// Status before the action was applied
    pub from: FetchStatus,
    /// Status after the action was applied
    pub to: FetchStatus,
    /// When the action was applied
    pub timestamp: DateTime<Utc>,
    /// Fetch request that caused the change, if any
    pub request_id: Option<Uuid>,
}

/// Bounded, ordered history of status changes.
///
/// # Example
///
/// ```rust
/// use tally::core::{FetchStatus, StatusHistory, StatusTransition};
/// use chrono::Utc;
///
/// let history = StatusHistory::new()
///     .record(StatusTransition {
///         from: FetchStatus::Idle,
///         to: FetchStatus::Loading,
///         timestamp: Utc::now(),
///         request_id: None,
///     })
///     .record(StatusTransition {
///         from: FetchStatus::Loading,
///         to: FetchStatus::Idle,
///         timestamp: Utc::now(),
///         request_id: None,
///     });
///
/// assert_eq!(history.path(), vec![FetchStatus::Idle, FetchStatus::Loading, FetchStatus::Idle]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusHistory {
    transitions: Vec<StatusTransition>,
    #[serde(default = "default_limit")]
    limit: usize,
}

impl Default for StatusHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusHistory {
    /// Create an empty history holding up to [`DEFAULT_HISTORY_LIMIT`] records.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create an empty history holding up to `limit` records.
    ///
    /// A limit of zero disables recording.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: Vec::new(),
            limit,
        }
    }

    /// Return a new history with the transition appended (pure).
    pub fn record(&self, transition: StatusTransition) -> Self {
        let mut next = self.clone();
        next.push(transition);
        next
    }

    /// Append in place, dropping the oldest record when full.
    ///
    /// Costs at most `limit` moves, independent of how many records were
    /// ever pushed.
    pub fn push(&mut self, transition: StatusTransition) {
        if self.limit == 0 {
            return;
        }
        if self.transitions.len() >= self.limit {
            self.transitions.remove(0);
        }
        self.transitions.push(transition);
    }

    /// Sequence of statuses visited, starting with the oldest kept `from`.
    pub fn path(&self) -> Vec<FetchStatus> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Time between the oldest and newest kept record.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Most recent change.
    pub fn last(&self) -> Option<&StatusTransition> {
        self.transitions.last()
    }

    /// Kept records, oldest first.
    pub fn transitions(&self) -> &[StatusTransition] {
        &self.transitions
    }

    /// Maximum number of records kept.
    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
