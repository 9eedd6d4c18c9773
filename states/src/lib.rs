//! Small reactive state runtime for immediate-mode UIs.
//!
//! States are plain values, computes derive from them, and commands perform
//! side effects. Everything that finishes off the UI thread reports back
//! through an [`Updater`] and is applied by [`StateCtx::sync_computes`].

mod command;
mod compute;
mod ctx;
mod dep;
mod error;
mod graph;
mod key;
mod runtime;
mod state;
mod state_sync_status;

pub use command::Command;
pub use compute::{Compute, assign_impl};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use error::Error;
pub use graph::{DepRoute, Graph, TopologyError};
pub use key::Key;
pub use runtime::{StateRuntime, Updater};
pub use state::{State, state_assign_impl};
pub use state_sync_status::StateSyncStatus;
