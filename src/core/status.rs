//! Lifecycle status of the asynchronous count fetch.
//!
//! The status is a closed three-state enum. Every change goes through one of
//! the pure lifecycle methods below, so the allowed transitions live in one
//! place:
//!
//! ```text
//! Idle | Failed --(started)--> Loading
//! Loading --(succeeded)--> Idle
//! Loading --(failed)--> Failed
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of the most recently applied fetch lifecycle event.
///
/// # Example
///
/// ```rust
/// use tally::core::FetchStatus;
///
/// let status = FetchStatus::default();
/// assert_eq!(status, FetchStatus::Idle);
///
/// let status = status.started().failed();
/// assert!(status.is_error());
/// assert_eq!(status.name(), "failed");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    /// No fetch in flight, last one (if any) succeeded.
    #[default]
    Idle,
    /// A fetch has been started and has not settled yet.
    Loading,
    /// The last settled fetch was rejected.
    Failed,
}

impl FetchStatus {
    /// Name used in logs and serialized snapshots.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Failed => "failed",
        }
    }

    /// Check if this status reports a failed fetch.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed)
    }

    /// Check if a fetch is currently in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// A fetch was started.
    ///
    /// Starting from `Failed` is treated the same as starting from `Idle`.
    /// Starting while already `Loading` stays `Loading`; overlapping fetches
    /// are not deduplicated.
    pub fn started(self) -> Self {
        Self::Loading
    }

    /// A fetch resolved successfully.
    ///
    /// Completions are applied last-wins: with overlapping fetches the
    /// status reflects whichever settled most recently.
    pub fn succeeded(self) -> Self {
        Self::Idle
    }

    /// A fetch was rejected.
    pub fn failed(self) -> Self {
        Self::Failed
    }
}

impl fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        assert_eq!(FetchStatus::default(), FetchStatus::Idle);
    }

    #[test]
    fn name_returns_lowercase_label() {
        assert_eq!(FetchStatus::Idle.name(), "idle");
        assert_eq!(FetchStatus::Loading.name(), "loading");
        assert_eq!(FetchStatus::Failed.name(), "failed");
    }

    #[test]
    fn is_error_identifies_failed() {
        assert!(!FetchStatus::Idle.is_error());
        assert!(!FetchStatus::Loading.is_error());
        assert!(FetchStatus::Failed.is_error());
    }

    #[test]
    fn started_moves_to_loading_from_any_status() {
        assert_eq!(FetchStatus::Idle.started(), FetchStatus::Loading);
        assert_eq!(FetchStatus::Failed.started(), FetchStatus::Loading);
        assert_eq!(FetchStatus::Loading.started(), FetchStatus::Loading);
    }

    #[test]
    fn settling_from_loading() {
        assert_eq!(FetchStatus::Loading.succeeded(), FetchStatus::Idle);
        assert_eq!(FetchStatus::Loading.failed(), FetchStatus::Failed);
    }

    #[test]
    fn serializes_as_lowercase_string() {
        let json = serde_json::to_string(&FetchStatus::Loading).unwrap();
        assert_eq!(json, "\"loading\"");

        let status: FetchStatus = serde_json::from_str("\"failed\"").unwrap();
        assert_eq!(status, FetchStatus::Failed);
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(FetchStatus::Idle.to_string(), "idle");
    }
}
