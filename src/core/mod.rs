//! Core types shared by every slice.
//!
//! This module contains the pure pieces of the store:
//! - The fetch lifecycle status and its transitions
//! - Guard predicates for conditional dispatch
//! - Immutable status history
//!
//! Nothing here performs I/O or holds locks.

mod guard;
mod history;
mod status;

pub use guard::Guard;
pub use history::{StatusHistory, StatusTransition, DEFAULT_HISTORY_LIMIT};
pub use status::FetchStatus;
