use std::any::Any;
use std::fmt::Debug;

use crate::{Dep, Updater};

/// An explicitly dispatched side effect.
///
/// Computes may run whenever a dependency changes, so anything that talks to
/// the network or reacts to a click lives in a command instead. Commands read
/// through [`Dep`] and write through [`Updater`].
pub trait Command: Any + Debug {
    fn run(&self, deps: Dep<'_>, updater: Updater);
}
