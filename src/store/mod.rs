//! Root store: global state tree, action routing, subscriptions and
//! configuration.
//!
//! The store is the only mutator of the state tree. It is an explicit
//! value rather than a global: clone the handle into whatever needs it.

mod builder;
mod config;
mod error;
mod root;
#[allow(clippy::module_inception)]
mod store;

pub use builder::StoreBuilder;
pub use config::{StoreConfig, MAX_FETCH_DELAY_MS};
pub use error::ConfigError;
pub use root::{reduce, Action, RootState};
pub use store::{Dispatch, FetchDispatch, Store, Subscription};
